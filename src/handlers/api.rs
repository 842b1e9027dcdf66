use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app::AppState;
use crate::models::{CitationStats, PublicationRecord};

/// Citation series plus headline counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CitationSummary {
    pub years: Vec<i32>,
    pub citations: Vec<u32>,
    pub stats: CitationStats,
}

#[utoipa::path(
    get,
    path = "/api/publications",
    tag = "profile",
    responses(
        (status = 200, description = "Publications in display order", body = Vec<PublicationRecord>)
    )
)]
pub async fn list_publications(State(state): State<AppState>) -> Json<Vec<PublicationRecord>> {
    Json(state.profile.publications.clone())
}

#[utoipa::path(
    get,
    path = "/api/citations",
    tag = "profile",
    responses(
        (status = 200, description = "Citations per year and profile counters", body = CitationSummary)
    )
)]
pub async fn citation_summary(State(state): State<AppState>) -> Json<CitationSummary> {
    let series = &state.profile.citations;
    Json(CitationSummary {
        years: series.years().to_vec(),
        citations: series.citations().to_vec(),
        stats: state.profile.stats,
    })
}
