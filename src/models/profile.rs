use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CitationSeries, CitationStats, PublicationRecord};

/// Everything the profile page shows, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub publications: Vec<PublicationRecord>,
    #[serde(default)]
    pub citations: CitationSeries,
    #[serde(default)]
    pub stats: CitationStats,
}

impl ProfileData {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut raw = serde_json::to_string_pretty(self)?;
        raw.push('\n');
        fs::write(path, raw)?;
        Ok(())
    }
}
