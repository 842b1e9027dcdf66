//! Scholar profile exports.
//!
//! An export is the JSON saved from a Scholar author profile: headline
//! counters, citations per year and the filled publication entries. It is
//! read from disk only; nothing here talks to the network.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;
use crate::models::{CitationSeries, CitationStats, ProfileData, PublicationRecord};

/// Only the first entries of an export end up on the page.
pub const MAX_EXPORTED_PUBLICATIONS: usize = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScholarExport {
    #[serde(default, alias = "citedby")]
    pub citations: u32,
    #[serde(default, alias = "hindex")]
    pub h_index: u32,
    #[serde(default, alias = "i10index")]
    pub i10_index: u32,
    #[serde(default)]
    pub cites_per_year: BTreeMap<i32, u32>,
    #[serde(default)]
    pub publications: Vec<ExportedPublication>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportedPublication {
    #[serde(default)]
    pub bib: ExportedBib,
    pub pub_url: Option<String>,
    pub eprint_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportedBib {
    pub title: Option<String>,
    pub author: Option<String>,
    pub venue: Option<String>,
    pub journal: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub pub_year: Option<String>,
}

/// Scholar writes years as strings in some exports and as numbers in others.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl ExportedPublication {
    pub fn to_record(&self) -> PublicationRecord {
        let bib = &self.bib;
        PublicationRecord {
            title: bib.title.clone().unwrap_or_else(|| String::from("Untitled")),
            authors: bib.author.clone().unwrap_or_default(),
            venue: bib
                .venue
                .clone()
                .or_else(|| bib.journal.clone())
                .unwrap_or_else(|| String::from("Unknown")),
            year: bib.pub_year.clone().unwrap_or_default(),
            link: self
                .pub_url
                .clone()
                .or_else(|| self.eprint_url.clone())
                .unwrap_or_else(|| String::from("#")),
        }
    }
}

impl ScholarExport {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn stats(&self) -> CitationStats {
        CitationStats {
            citations: self.citations,
            h_index: self.h_index,
            i10_index: self.i10_index,
        }
    }

    pub fn citation_series(&self) -> CitationSeries {
        CitationSeries::from_yearly(&self.cites_per_year)
    }

    pub fn publication_records(&self) -> Vec<PublicationRecord> {
        self.publications
            .iter()
            .take(MAX_EXPORTED_PUBLICATIONS)
            .map(ExportedPublication::to_record)
            .collect()
    }

    /// Fold the export into `profile`. With `citations_only` the publication
    /// list is left alone.
    pub fn apply_to(&self, profile: &mut ProfileData, citations_only: bool) {
        profile.stats = self.stats();
        profile.citations = self.citation_series();
        if !citations_only {
            profile.publications = self.publication_records();
        }
    }
}
