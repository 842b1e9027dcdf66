use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ScholarProfile;
use crate::handlers;
use crate::models::{CitationStats, ProfileData, PublicationRecord};

/// Shared, read-only request state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub profile: Arc<ProfileData>,
    pub scholar: Arc<ScholarProfile>,
}

impl AppState {
    pub fn new(profile: ProfileData, scholar: ScholarProfile) -> Self {
        Self {
            profile: Arc::new(profile),
            scholar: Arc::new(scholar),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::api::list_publications,
        handlers::api::citation_summary
    ),
    components(schemas(PublicationRecord, CitationStats, handlers::api::CitationSummary)),
    tags(
        (name = "profile", description = "Publication list and citation data behind the profile page")
    ),
    info(
        title = "scholarpage",
        description = "Academic profile page with publications and yearly citations"
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::web::profile_page))
        .route("/health", get(|| async { "ok" }))
        .route("/api/publications", get(handlers::api::list_publications))
        .route("/api/citations", get(handlers::api::citation_summary))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
