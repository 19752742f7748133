//! Error types for the web application.
//!
//! - [`AppError`] - Bootstrap and DOM wiring failures

use panguin_core::FileListError;
use thiserror::Error;

/// Errors raised while starting the app or talking to the DOM.
#[derive(Debug, Error)]
pub enum AppError {
    /// Browser window or document not available
    #[error("Browser document not available")]
    NoDocument,
    /// The element the app mounts into is missing from the page
    #[error("Mount target #{0} not found")]
    MissingMountTarget(&'static str),
    /// The bundled file list could not be loaded
    #[error(transparent)]
    FileList(#[from] FileListError),
    /// addEventListener threw
    #[error("Failed to register {event} listener: {reason}")]
    ListenerRegistration { event: &'static str, reason: String },
}
