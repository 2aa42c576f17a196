// File: src/error.rs
use thiserror::Error;

/// Everything that can go wrong while building or persisting the engine.
///
/// Matching and ranking never fail; the variants here are configuration
/// faults (raised at construction) and I/O from the persistence layer.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("unknown tokenize strategy '{0}'")]
    UnknownStrategy(String),

    #[error("unknown trim target '{0}': expected 'input' or 'indexing'")]
    UnknownTrimTarget(String),

    #[error("unknown match strategy '{0}': expected 'prefix' or 'partial'")]
    UnknownMatchMode(String),

    #[error("{strategy} tokenizer needs a segmenter but none was supplied")]
    MissingSegmenter { strategy: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("failed to persist file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, CompletionError>;
