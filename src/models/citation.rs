use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Error, Result};

/// Yearly citation counts, index aligned: `citations[i]` belongs to `years[i]`.
///
/// The alignment is checked when the series is built or deserialized, so a
/// constructed series always has as many counts as years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCitationSeries")]
pub struct CitationSeries {
    years: Vec<i32>,
    citations: Vec<u32>,
}

#[derive(Deserialize)]
struct RawCitationSeries {
    #[serde(default)]
    years: Vec<i32>,
    #[serde(default)]
    citations: Vec<u32>,
}

impl TryFrom<RawCitationSeries> for CitationSeries {
    type Error = Error;

    fn try_from(raw: RawCitationSeries) -> Result<Self> {
        Self::new(raw.years, raw.citations)
    }
}

impl CitationSeries {
    pub fn new(years: Vec<i32>, citations: Vec<u32>) -> Result<Self> {
        if years.len() != citations.len() {
            return Err(Error::MisalignedSeries {
                years: years.len(),
                citations: citations.len(),
            });
        }
        Ok(Self { years, citations })
    }

    /// Build a series from a year -> count map, oldest year first.
    pub fn from_yearly(counts: &BTreeMap<i32, u32>) -> Self {
        let (years, citations) = counts.iter().map(|(year, count)| (*year, *count)).unzip();
        Self { years, citations }
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn citations(&self) -> &[u32] {
        &self.citations
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// `(year, count)` pairs in series order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.years.iter().copied().zip(self.citations.iter().copied())
    }

    pub fn total(&self) -> u64 {
        self.citations.iter().map(|c| u64::from(*c)).sum()
    }
}

/// Headline counters of the profile's stat block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CitationStats {
    #[serde(default)]
    pub citations: u32,
    #[serde(default)]
    pub h_index: u32,
    #[serde(default)]
    pub i10_index: u32,
}
