use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Citation series is misaligned: {years} years but {citations} citation counts")]
    MisalignedSeries { years: usize, citations: usize },

    #[error("Invalid profile URL '{url}': {source}")]
    InvalidProfileUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
