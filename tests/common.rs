#![allow(dead_code)]

use axum::Router;
use scholarpage::{router, AppState, CitationSeries, CitationStats, ProfileData, PublicationRecord, ScholarProfile};

pub const SCHOLAR_BASE_URL: &str = "https://scholar.google.es/citations";
pub const SCHOLAR_USER_ID: &str = "ULBrgQcAAAAJ";

pub fn scholar() -> ScholarProfile {
    ScholarProfile::new(SCHOLAR_BASE_URL, SCHOLAR_USER_ID).expect("valid scholar base URL")
}

/// Single publication with a three year citation series
pub fn sample_profile() -> ProfileData {
    ProfileData {
        publications: vec![PublicationRecord::new("X", "A, B", "J", "2023", "https://doi.org/x")],
        citations: CitationSeries::new(vec![2023, 2024, 2025], vec![2, 2, 13])
            .expect("aligned series"),
        stats: CitationStats {
            citations: 17,
            h_index: 1,
            i10_index: 1,
        },
    }
}

pub fn empty_profile() -> ProfileData {
    ProfileData {
        publications: Vec::new(),
        ..sample_profile()
    }
}

/// Create the application router for testing
pub fn create_test_app(profile: ProfileData) -> Router {
    router(AppState::new(profile, scholar()))
}
