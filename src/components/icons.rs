//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;
use panguin_core::{File, ViewMode};

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuFile as File, LuFolder as Folder, LuLayoutGrid as Icons, LuLayoutList as Tiles,
        LuList as List, LuTable as Details,
    };
}

mod bootstrap {
    pub use icondata::{
        BsFileEarmark as File, BsFolderFill as Folder, BsGrid as Icons, BsGrid1x2 as Tiles,
        BsListUl as List, BsTable as Details,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(MODE_ICONS, Icons);
themed_icon!(MODE_LIST, List);
themed_icon!(MODE_DETAILS, Details);
themed_icon!(MODE_TILES, Tiles);

/// Icon for a file record.
pub fn file_icon(file: &File) -> Icon {
    if file.is_dir { FOLDER } else { FILE }
}

/// Icon for a view mode button.
pub fn mode_icon(mode: ViewMode) -> Icon {
    match mode {
        ViewMode::Icons => MODE_ICONS,
        ViewMode::List => MODE_LIST,
        ViewMode::Details => MODE_DETAILS,
        ViewMode::Tiles => MODE_TILES,
    }
}
