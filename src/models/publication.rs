use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One bibliographic entry shown on the profile page.
///
/// Fields are free-form text and are rendered as given; list order is
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublicationRecord {
    pub title: String,
    /// Comma separated author names
    pub authors: String,
    pub venue: String,
    pub year: String,
    pub link: String,
}

impl PublicationRecord {
    pub fn new(
        title: impl Into<String>,
        authors: impl Into<String>,
        venue: impl Into<String>,
        year: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors: authors.into(),
            venue: venue.into(),
            year: year.into(),
            link: link.into(),
        }
    }
}
