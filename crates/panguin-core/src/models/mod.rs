//! Data models for the explorer.
//!
//! - [`File`] - A file record as supplied by the host page
//! - [`ViewMode`] - Which view renders the files

mod file;
mod view_mode;

pub use file::{parse_file_list, File};
pub use view_mode::ViewMode;
