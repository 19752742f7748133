//! Panguin file explorer, rendered in the browser with Leptos.
//!
//! - [`app`] - Root component and startup
//! - [`components`] - Explorer views and toolbar
//! - [`config`] - Compile-time configuration
//! - [`error`] - Error types
//! - [`utils`] - Browser helpers

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod utils;

pub use app::{App, run};
pub use error::AppError;
