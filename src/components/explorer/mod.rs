//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Dispatches to the view for the current mode
//! - [`DetailView`] - Resizable table with selection
//! - [`IconView`], [`ListView`], [`TileView`] - Read-only layouts

pub mod detail;
#[allow(clippy::module_inception)]
mod explorer;
mod icon_view;
mod list_view;
mod tile_view;

pub use detail::{DetailHeader, DetailRow, DetailView, Divider};
pub use explorer::Explorer;
pub use icon_view::IconView;
pub use list_view::ListView;
pub use tile_view::TileView;
