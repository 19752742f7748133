//! Details view components.
//!
//! - [`DetailView`] - Owns column widths and selection
//! - [`DetailHeader`] - Column titles with dividers
//! - [`DetailRow`] - One file row
//! - [`Divider`] - Drag handle that resizes a column

mod divider;
mod header;
mod row;
mod view;

pub use divider::Divider;
pub use header::DetailHeader;
pub use row::DetailRow;
pub use view::DetailView;
