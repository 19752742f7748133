//! View modes for the explorer.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownViewMode;

/// How the explorer lays out its files.
///
/// Every mode maps to exactly one view. Unknown modes can only come in through
/// [`FromStr`], which rejects them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Large icons in a grid
    Icons,
    /// Small icons in wrapped columns
    List,
    /// Resizable table with name and size (default)
    #[default]
    Details,
    /// Icons with name and size beside them
    Tiles,
}

impl ViewMode {
    /// All modes in toolbar order.
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Icons,
        ViewMode::List,
        ViewMode::Details,
        ViewMode::Tiles,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Icons => "Icons",
            Self::List => "List",
            Self::Details => "Details",
            Self::Tiles => "Tiles",
        }
    }

    /// Lowercase identifier used in URL hashes.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Icons => "icons",
            Self::List => "list",
            Self::Details => "details",
            Self::Tiles => "tiles",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownViewMode(s.to_string()))
    }
}
