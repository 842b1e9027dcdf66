use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, error};

use crate::app::AppState;
use crate::bootstrap::{activate, ProfileScript};
use crate::config::ScholarProfile;
use crate::error::Result;
use crate::models::{CitationStats, ProfileData};
use crate::page::{Document, Element};
use crate::render::{
    ChartJs, CitationChartRenderer, PublicationRenderer, CHART_ATTRIBUTE, CHART_TARGET,
    PUBLICATIONS_TARGET,
};

#[derive(Template)]
#[template(path = "profile.html")]
struct ProfileTemplate<'a> {
    stats: &'a CitationStats,
    canvas: Option<String>,
    publications: Option<PublicationsSection>,
    profile_url: String,
}

#[derive(Template)]
#[template(path = "chart_canvas.html")]
struct ChartCanvasTemplate<'a> {
    id: &'a str,
    config: Option<&'a str>,
}

struct PublicationsSection {
    id: &'static str,
    html: String,
}

/// Which render targets the page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSections {
    pub publications: bool,
    pub chart: bool,
}

impl Default for PageSections {
    fn default() -> Self {
        Self {
            publications: true,
            chart: true,
        }
    }
}

/// Markup of the rendered targets, ready to be placed in a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSections {
    /// The chart canvas element, `data-chart` included
    pub canvas: Option<String>,
    /// Inner markup of the publication list container
    pub publications: Option<String>,
}

/// Builds the page structure and lets the profile script render into it once
/// parsing finishes.
pub fn render_sections(
    profile: &ProfileData,
    scholar: &ScholarProfile,
    sections: PageSections,
) -> Result<RenderedSections> {
    let mut document = Document::loading();
    if sections.chart {
        document.append(Element::canvas(CHART_TARGET));
    }
    if sections.publications {
        document.append(Element::container(PUBLICATIONS_TARGET));
    }

    let script = ProfileScript::new(
        PublicationRenderer::new(&profile.publications, scholar),
        CitationChartRenderer::new(&profile.citations),
        ChartJs,
    );
    let activation = activate(&mut document, script);
    let fired = document.finish_parsing();
    debug!(?activation, fired, "profile page activated");

    let canvas = document
        .get(CHART_TARGET)
        .map(|canvas| {
            ChartCanvasTemplate {
                id: canvas.id(),
                config: canvas.attribute(CHART_ATTRIBUTE),
            }
            .render()
        })
        .transpose()?;
    let publications = document
        .get(PUBLICATIONS_TARGET)
        .map(|list| list.inner_html().to_string());

    Ok(RenderedSections { canvas, publications })
}

/// Renders the whole profile page.
pub fn render_profile_page(
    profile: &ProfileData,
    scholar: &ScholarProfile,
    sections: PageSections,
) -> Result<String> {
    let rendered = render_sections(profile, scholar, sections)?;
    let template = ProfileTemplate {
        stats: &profile.stats,
        canvas: rendered.canvas,
        publications: rendered.publications.map(|html| PublicationsSection {
            id: PUBLICATIONS_TARGET,
            html,
        }),
        profile_url: scholar.profile_url(),
    };
    Ok(template.render()?)
}

pub async fn profile_page(State(state): State<AppState>) -> std::result::Result<Response, StatusCode> {
    match render_profile_page(&state.profile, &state.scholar, PageSections::default()) {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            error!("Template error: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
