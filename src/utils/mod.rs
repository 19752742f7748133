//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window/document access, URL hash helpers, scoped event listeners

pub mod dom;
