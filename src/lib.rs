pub mod app;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod page;
pub mod render;
pub mod utils;

// Re-export commonly used items
pub use app::{router, AppState};
pub use bootstrap::{activate, Activation, ProfileScript};
pub use config::{AppConfig, ScholarProfile};
pub use error::{Error, Result};
pub use handlers::web::{render_profile_page, render_sections, PageSections, RenderedSections};
pub use models::{CitationSeries, CitationStats, ProfileData, PublicationRecord, ScholarExport};
pub use page::{Document, Element, ElementKind, ElementTree, ReadyState, TargetProvider};
pub use render::{ChartConfig, ChartJs, ChartingCapability, CitationChartRenderer, PublicationRenderer};
pub use utils::{refresh_page, rewrite_stat_counters, PageRefresh, StatCounterRewrite};
