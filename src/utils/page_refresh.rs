//! Brings a previously exported profile page up to date with new profile
//! data: stat counters, the chart canvas and the publication list.

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

use crate::config::ScholarProfile;
use crate::error::Result;
use crate::handlers::web::{render_sections, PageSections};
use crate::models::ProfileData;
use crate::utils::rewrite_stat_counters;

// Ids are the default render targets; an exported page always carries them.
static CANVAS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<canvas id="citationChart"[^>]*></canvas>"#)
        .expect("canvas pattern should compile")
});

// Record fields are escaped, so `</section>` only closes the list's section.
static LIST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<div id="publications-list"[^>]*>).*?(</div>\s*</section>)"#)
        .expect("publication list pattern should compile")
});

// Indentation of the list's closing tag in profile.html.
const LIST_CLOSE_INDENT: &str = "            ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRefresh {
    pub html: String,
    /// Number of stat counters rewritten
    pub counters: usize,
    pub chart: bool,
    pub publications: bool,
}

/// Rewrite the parts of `html` that are derived from `profile`.
///
/// With `citations_only` the publication list is left alone. Sections the
/// page doesn't carry are skipped and reported as `false`.
pub fn refresh_page(
    html: &str,
    profile: &ProfileData,
    scholar: &ScholarProfile,
    citations_only: bool,
) -> Result<PageRefresh> {
    let counters = rewrite_stat_counters(html, &profile.stats);
    let sections = PageSections {
        publications: !citations_only,
        chart: true,
    };
    let rendered = render_sections(profile, scholar, sections)?;

    let mut html = counters.html;
    let mut chart = false;
    if let Some(canvas) = rendered.canvas.filter(|_| CANVAS_PATTERN.is_match(&html)) {
        html = CANVAS_PATTERN.replace(&html, NoExpand(&canvas)).into_owned();
        chart = true;
    }

    let mut publications = false;
    if let Some(list) = rendered.publications.filter(|_| LIST_PATTERN.is_match(&html)) {
        html = LIST_PATTERN
            .replace(&html, |caps: &Captures| {
                format!("{}\n{}\n{}{}", &caps[1], list, LIST_CLOSE_INDENT, &caps[2])
            })
            .into_owned();
        publications = true;
    }

    Ok(PageRefresh {
        html,
        counters: counters.replaced,
        chart,
        publications,
    })
}
