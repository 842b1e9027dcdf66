pub mod chart;
pub mod chartjs;
pub mod publications;

pub use chart::*;
pub use chartjs::*;
pub use publications::*;
