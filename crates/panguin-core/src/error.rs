//! Error types for file list loading and view mode parsing.

use thiserror::Error;

/// Errors raised while loading a file list.
#[derive(Debug, Error)]
pub enum FileListError {
    /// The input is not a JSON array of file records.
    #[error("invalid file list: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two records share a name. Names key the rendered rows.
    #[error("duplicate file name in list: {0:?}")]
    DuplicateName(String),
}

/// A view mode slug that doesn't name any [`ViewMode`](crate::ViewMode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode: {0:?}")]
pub struct UnknownViewMode(pub String);
