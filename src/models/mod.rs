pub mod publication;
pub mod citation;
pub mod profile;
pub mod scholar_export;

pub use publication::*;
pub use citation::*;
pub use profile::*;
pub use scholar_export::*;
