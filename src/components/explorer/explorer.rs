//! Main explorer component.
//!
//! Picks the view for the current mode. All views receive the same files and
//! share no state, so a mode switch remounts the destination view from
//! scratch.

use leptos::prelude::*;
use panguin_core::{File, ViewMode};

use super::{DetailView, IconView, ListView, TileView};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer(
    #[prop(into)] files: Signal<Vec<File>>,
    #[prop(into)] mode: Signal<ViewMode>,
) -> impl IntoView {
    // Only a real change of mode should remount the view
    let mode = Memo::new(move |_| mode.get());

    view! {
        <div class=css::explorer>
            {move || match mode.get() {
                ViewMode::Icons => view! { <IconView files=files /> }.into_any(),
                ViewMode::List => view! { <ListView files=files /> }.into_any(),
                ViewMode::Details => view! { <DetailView files=files /> }.into_any(),
                ViewMode::Tiles => view! { <TileView files=files /> }.into_any(),
            }}
        </div>
    }
}
