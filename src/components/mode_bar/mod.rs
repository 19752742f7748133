//! Toolbar for switching explorer view modes.
//!
//! Shows the app name and one button per [`ViewMode`]. The active mode is
//! mirrored into the URL hash so a reload opens the same view.

use leptos::prelude::*;
use leptos_icons::Icon;
use panguin_core::ViewMode;

use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/mode_bar/mode_bar.module.css");

#[component]
pub fn ModeBar(mode: RwSignal<ViewMode>) -> impl IntoView {
    let buttons = ViewMode::ALL
        .into_iter()
        .map(|m| {
            let is_active = Signal::derive(move || mode.get() == m);
            let on_click = move |_: leptos::ev::MouseEvent| {
                if mode.get_untracked() != m {
                    mode.set(m);
                    dom::replace_hash(&format!("#{}", m.slug()));
                }
            };
            view! {
                <button
                    class=move || {
                        if is_active.get() {
                            format!("{} {}", css::modeButton, css::modeButtonActive)
                        } else {
                            css::modeButton.to_string()
                        }
                    }
                    on:click=on_click
                    title=m.label()
                    aria-label=m.label()
                    aria-pressed=move || is_active.get().to_string()
                >
                    <Icon icon=ic::mode_icon(m) />
                </button>
            }
        })
        .collect_view();

    view! {
        <header class=css::bar>
            <span class=css::title>{APP_NAME}</span>
            <div class=css::modes role="toolbar" aria-label="View mode">
                {buttons}
            </div>
        </header>
    }
}
