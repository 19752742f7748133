//! Large-icon grid view.

use leptos::prelude::*;
use leptos_icons::Icon;
use panguin_core::File;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/views.module.css");

#[component]
pub fn IconView(#[prop(into)] files: Signal<Vec<File>>) -> impl IntoView {
    view! {
        <div class=css::iconGrid role="list" aria-label="Files">
            <For
                each=move || files.get()
                key=|file| file.name.clone()
                children=move |file| {
                    let icon = ic::file_icon(&file);
                    let title = file.name.clone();
                    view! {
                        <div class=css::iconItem role="listitem" title=title>
                            <span class=css::iconGlyph aria-hidden="true">
                                <Icon icon=icon />
                            </span>
                            <span class=css::iconLabel>{file.name}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
