//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Data assets are loaded at compile time using `include_str!`.

use panguin_core::ViewMode;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the toolbar.
pub const APP_NAME: &str = "Panguin";

/// Id of the element the app mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Explorer Configuration
// =============================================================================

/// Files shown by the explorer, as a JSON array of `{ name, size, isDir }`.
pub const FILE_LIST: &str = include_str!("../assets/files.json");

/// Mode used when the URL hash doesn't name one.
pub const DEFAULT_VIEW_MODE: ViewMode = ViewMode::Details;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
