pub mod page_refresh;
pub mod stat_counters;

pub use page_refresh::*;
pub use stat_counters::*;
