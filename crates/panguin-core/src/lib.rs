//! Target-independent logic for the Panguin file explorer.
//!
//! Everything here is plain data and arithmetic so it can be tested natively:
//! - [`models`] - File records and view modes
//! - [`detail`] - Column widths and row selection for the details table
//! - [`drag`] - Divider drag arithmetic
//! - [`format`] - Display formatting
//! - [`error`] - Error types

pub mod detail;
pub mod drag;
pub mod error;
pub mod format;
pub mod models;

pub use detail::{Column, ColumnWidths, DetailState, DEFAULT_COLUMN_WIDTHS, MIN_COLUMN_WIDTH};
pub use error::{FileListError, UnknownViewMode};
pub use models::{parse_file_list, File, ViewMode};
