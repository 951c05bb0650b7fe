use std::num::ParseIntError;
use thiserror::Error;

/// Semantic decode failure. Aborts the whole resolver run.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid multiplicity suffix {suffix:?} in property `{property}` of {about}: {source}")]
    InvalidContainsSuffix {
        about: String,
        property: String,
        suffix: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid resolver config: {0}")]
    Json(#[from] serde_json::Error),
}
