//! Compact list view: small icons and names, wrapped into columns.

use leptos::prelude::*;
use leptos_icons::Icon;
use panguin_core::File;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/views.module.css");

#[component]
pub fn ListView(#[prop(into)] files: Signal<Vec<File>>) -> impl IntoView {
    view! {
        <div class=css::list role="list" aria-label="Files">
            <For
                each=move || files.get()
                key=|file| file.name.clone()
                children=move |file| {
                    let name_class = if file.is_dir {
                        format!("{} {}", css::listName, css::nameDir)
                    } else {
                        css::listName.to_string()
                    };
                    let icon = ic::file_icon(&file);
                    view! {
                        <div class=css::listItem role="listitem">
                            <span class=css::listIcon aria-hidden="true">
                                <Icon icon=icon />
                            </span>
                            <span class=name_class>{file.name}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
