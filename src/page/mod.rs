pub mod document;
pub mod element;

pub use document::*;
pub use element::*;
