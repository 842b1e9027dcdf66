//! Stat counter rewriting for already published pages.
//!
//! A profile page carries its headline counters as
//!
//! ```html
//! <div class="stat-item">
//!     <div class="stat-number">17</div>
//!     <div class="stat-label">Citations</div>
//! </div>
//! ```
//!
//! Only the number inside each labelled block is replaced; the rest of the
//! page is left byte for byte.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::CitationStats;

pub const CITATIONS_LABEL: &str = "Citations";
pub const H_INDEX_LABEL: &str = "h-index";
pub const I10_INDEX_LABEL: &str = "i10-index";

static COUNTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(<div class="stat-item">\s*<div class="stat-number">)\d+(</div>\s*<div class="stat-label">(Citations|h-index|i10-index)</div>)"#,
    )
    .expect("stat counter pattern should compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCounterRewrite {
    pub html: String,
    /// Number of counters found and rewritten
    pub replaced: usize,
}

/// Rewrite the Citations, h-index and i10-index counters of `html`.
///
/// # Examples
///
/// ```
/// use scholarpage::{rewrite_stat_counters, CitationStats};
///
/// let html = r#"<div class="stat-item"><div class="stat-number">3</div><div class="stat-label">h-index</div></div>"#;
/// let stats = CitationStats { citations: 0, h_index: 4, i10_index: 0 };
/// let rewrite = rewrite_stat_counters(html, &stats);
/// assert!(rewrite.html.contains(r#"<div class="stat-number">4</div>"#));
/// assert_eq!(rewrite.replaced, 1);
/// ```
pub fn rewrite_stat_counters(html: &str, stats: &CitationStats) -> StatCounterRewrite {
    let mut replaced = 0;
    let html = COUNTER_PATTERN
        .replace_all(html, |caps: &Captures| {
            let value = match &caps[3] {
                CITATIONS_LABEL => stats.citations,
                H_INDEX_LABEL => stats.h_index,
                _ => stats.i10_index,
            };
            replaced += 1;
            format!("{}{}{}", &caps[1], value, &caps[2])
        })
        .into_owned();

    StatCounterRewrite { html, replaced }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<section class="stats">
    <div class="stat-item">
        <div class="stat-number">10</div>
        <div class="stat-label">Citations</div>
    </div>
    <div class="stat-item">
        <div class="stat-number">1</div>
        <div class="stat-label">h-index</div>
    </div>
    <div class="stat-item">
        <div class="stat-number">0</div>
        <div class="stat-label">i10-index</div>
    </div>
</section>
<p>Published 2023 with 10 figures</p>"#;

    fn stats() -> CitationStats {
        CitationStats {
            citations: 17,
            h_index: 2,
            i10_index: 1,
        }
    }

    #[test]
    fn test_rewrites_all_counters() {
        let rewrite = rewrite_stat_counters(PAGE, &stats());
        assert_eq!(rewrite.replaced, 3);
        assert!(rewrite.html.contains(
            "<div class=\"stat-number\">17</div>\n        <div class=\"stat-label\">Citations</div>"
        ));
        assert!(rewrite.html.contains(
            "<div class=\"stat-number\">2</div>\n        <div class=\"stat-label\">h-index</div>"
        ));
        assert!(rewrite.html.contains(
            "<div class=\"stat-number\">1</div>\n        <div class=\"stat-label\">i10-index</div>"
        ));
    }

    #[test]
    fn test_leaves_other_numbers() {
        let rewrite = rewrite_stat_counters(PAGE, &stats());
        assert!(rewrite.html.ends_with("<p>Published 2023 with 10 figures</p>"));
    }

    #[test]
    fn test_label_picks_value_regardless_of_order() {
        let html = r#"<div class="stat-item"><div class="stat-number">0</div><div class="stat-label">i10-index</div></div>
<div class="stat-item"><div class="stat-number">0</div><div class="stat-label">Citations</div></div>"#;
        let rewrite = rewrite_stat_counters(html, &stats());
        assert_eq!(rewrite.replaced, 2);
        assert!(rewrite.html.starts_with(
            r#"<div class="stat-item"><div class="stat-number">1</div><div class="stat-label">i10-index</div>"#
        ));
        assert!(rewrite.html.contains(
            r#"<div class="stat-number">17</div><div class="stat-label">Citations</div>"#
        ));
    }

    #[test]
    fn test_page_without_counters() {
        let html = "<html><body><p>nothing here</p></body></html>";
        let rewrite = rewrite_stat_counters(html, &stats());
        assert_eq!(rewrite.replaced, 0);
        assert_eq!(rewrite.html, html);
    }

    #[test]
    fn test_rendered_page_round_trips() {
        use crate::config::ScholarProfile;
        use crate::handlers::web::{render_profile_page, PageSections};
        use crate::models::ProfileData;

        let scholar = ScholarProfile::new("https://scholar.google.es/citations", "id").unwrap();
        let html = render_profile_page(&ProfileData::default(), &scholar, PageSections::default()).unwrap();

        let rewrite = rewrite_stat_counters(&html, &stats());
        assert_eq!(rewrite.replaced, 3);
        assert!(rewrite.html.contains(r#"<div class="stat-number">17</div>"#));
    }
}
