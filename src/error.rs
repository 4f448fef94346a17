// src/error.rs
use std::path::PathBuf;

/// Everything the query pipeline and its file glue can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The registry server could not be reached. Aborts a batch.
    #[error("[CNE] cannot reach the registry server {url} [{identifier}]: {source}")]
    Connection {
        url: String,
        identifier: String,
        #[source]
        source: TransportError,
    },

    #[error("[CNE] cannot build the HTTP client: {0}")]
    Client(#[source] TransportError),

    #[error("[CNE] malformed identifier: {0:?}")]
    MalformedInput(String),

    #[error("[CNE] query parameters cannot be empty")]
    EmptyBatch,

    /// Objection marker present but no reason could be pulled out of the page.
    #[error("[CNE] objection found for {identifier} but its reason could not be extracted")]
    ClassificationAmbiguity { identifier: String },

    #[error("[CNE] unexpected page layout for {identifier}: expected {expected} segments, found {found}")]
    UnexpectedLayout {
        identifier: String,
        expected: usize,
        found: usize,
    },

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("invalid objection pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
}

impl Error {
    /// True for transport-level failures; the batch runner stops on these.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }
}

/// Failure below the HTTP status line: DNS, refused connection, timeout, broken body.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
