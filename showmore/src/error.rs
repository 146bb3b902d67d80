//! Error types for widget construction.

use pagedom::{MarkupError, SelectorError};
use thiserror::Error;

/// Errors raised while resolving options or attaching a widget.
///
/// Once a widget is attached nothing it does can fail: document operations
/// on missing nodes are no-ops.
#[derive(Debug, Error)]
pub enum ShowMoreError {
    #[error("showInitialNumberOfItems must be a positive integer, got {0}")]
    InvalidInitialCount(i64),

    #[error("showMoreNumberOfItems must be zero or a positive integer, got {0}")]
    InvalidBatchSize(i64),

    #[error("invalid childSelector: {0}")]
    Selector(#[from] SelectorError),

    #[error("invalid showMoreMarkup: {0}")]
    Markup(#[from] MarkupError),

    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("container {0} is not in the document")]
    ContainerNotFound(String),
}
