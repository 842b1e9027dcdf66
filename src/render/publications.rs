use askama::Template;
use tracing::debug;

use crate::config::ScholarProfile;
use crate::error::Result;
use crate::models::PublicationRecord;
use crate::page::TargetProvider;

/// Default id of the publication list container.
pub const PUBLICATIONS_TARGET: &str = "publications-list";

#[derive(Template)]
#[template(path = "publication_item.html")]
struct PublicationItemTemplate<'a> {
    record: &'a PublicationRecord,
}

#[derive(Template)]
#[template(path = "publications_fallback.html")]
struct PublicationsFallbackTemplate<'a> {
    profile_url: &'a str,
}

/// Writes the publication list into its container, or a pointer to the
/// Scholar profile when the list is empty.
#[derive(Debug, Clone)]
pub struct PublicationRenderer<'a> {
    publications: &'a [PublicationRecord],
    scholar: &'a ScholarProfile,
    target_id: String,
}

impl<'a> PublicationRenderer<'a> {
    pub fn new(publications: &'a [PublicationRecord], scholar: &'a ScholarProfile) -> Self {
        Self {
            publications,
            scholar,
            target_id: PUBLICATIONS_TARGET.to_string(),
        }
    }

    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = target_id.into();
        self
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// One markup fragment per record, in list order.
    pub fn fragments(&self) -> Result<Vec<String>> {
        self.publications
            .iter()
            .map(|record| Ok(PublicationItemTemplate { record }.render()?))
            .collect()
    }

    pub fn fallback(&self) -> Result<String> {
        let profile_url = self.scholar.profile_url();
        Ok(PublicationsFallbackTemplate {
            profile_url: &profile_url,
        }
        .render()?)
    }

    /// Replaces the container's content. Without a container this does nothing.
    pub fn render<T>(&self, targets: &mut T) -> Result<()>
    where
        T: TargetProvider + ?Sized,
    {
        let Some(target) = targets.lookup(&self.target_id) else {
            debug!(target_id = %self.target_id, "publication list not on page");
            return Ok(());
        };

        if self.publications.is_empty() {
            let fallback = self.fallback()?;
            target.set_inner_html(fallback);
            return Ok(());
        }

        let fragments = self.fragments()?;
        target.clear();
        for fragment in &fragments {
            target.append_html(fragment);
        }
        debug!(count = fragments.len(), "publications rendered");
        Ok(())
    }
}
