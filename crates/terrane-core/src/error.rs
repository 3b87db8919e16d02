//! Error types for the Terrane toolkit

use thiserror::Error;

/// Errors raised by the document model
#[derive(Error, Debug)]
pub enum TerraneError {
    /// Structural anchors missing; no partial model is returned.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Declared layer count does not match the discovered layer blocks.
    #[error("event {order}: declared {declared} layers but found {found}")]
    LayerCount {
        order: u32,
        declared: usize,
        found: usize,
    },

    #[error("unsupported event type: {0}")]
    UnsupportedEventType(String),

    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("no event with order number {0}")]
    UnknownReference(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Terrane operations
pub type TerraneResult<T> = Result<T, TerraneError>;
