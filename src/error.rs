use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading datasets or configuration.
#[derive(Debug, Error)]
pub enum InsightError {
    /// File could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File was read but is not the JSON shape we expect
    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A trends/place response with no location entries
    #[error("trend snapshot {} contains no locations", .path.display())]
    EmptySnapshot { path: PathBuf },

    /// Config file is not valid TOML for our schema
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, InsightError>;
