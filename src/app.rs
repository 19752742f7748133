//! Root application module.
//!
//! Contains the main App component and the startup logic that mounts it.

use leptos::prelude::*;
use panguin_core::{File, ViewMode, parse_file_list};
use wasm_bindgen::JsCast;

use crate::components::{Explorer, ModeBar};
use crate::config::{DEFAULT_VIEW_MODE, FILE_LIST, MOUNT_ELEMENT_ID};
use crate::error::AppError;
use crate::utils::dom;

/// Root application component.
///
/// Holds the file list and the current view mode, and renders the mode
/// toolbar above the explorer.
#[component]
pub fn App(files: Vec<File>, initial_mode: ViewMode) -> impl IntoView {
    let files = RwSignal::new(files);
    let mode = RwSignal::new(initial_mode);

    view! {
        <div style="display: flex; flex-direction: column; height: 100vh;">
            <ModeBar mode=mode />
            <Explorer files=files mode=mode />
        </div>
    }
}

/// Resolve a URL hash into a view mode.
///
/// An empty hash means the default mode. An unknown one is logged and also
/// falls back to the default.
pub fn mode_from_hash(hash: &str) -> ViewMode {
    if hash.is_empty() {
        return DEFAULT_VIEW_MODE;
    }
    hash.parse().unwrap_or_else(|err| {
        dom::warn(&format!("{}, using {}", err, DEFAULT_VIEW_MODE));
        DEFAULT_VIEW_MODE
    })
}

/// Load the bundled file list and mount the app into the page.
pub fn run() -> Result<(), AppError> {
    console_error_panic_hook::set_once();

    let files = parse_file_list(FILE_LIST)?;
    let initial_mode = mode_from_hash(&dom::get_hash());

    let root = dom::document()
        .ok_or(AppError::NoDocument)?
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .ok_or(AppError::MissingMountTarget(MOUNT_ELEMENT_ID))?
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App files=files initial_mode=initial_mode /> }).forget();
    Ok(())
}
