//! UI components built with Leptos.
//!
//! - [`explorer`] - File explorer views and the mode dispatcher
//! - [`mode_bar`] - Toolbar for switching view modes
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
pub mod mode_bar;

pub use explorer::Explorer;
pub use mode_bar::ModeBar;
