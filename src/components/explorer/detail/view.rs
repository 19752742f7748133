//! Details table: the one view with interactive state.

use leptos::prelude::*;
use panguin_core::{Column, DetailState, File};

use super::{DetailHeader, DetailRow};

stylance::import_crate_style!(css, "src/components/explorer/detail/detail.module.css");

/// Two-column table of files with resizable columns and single selection.
///
/// Owns the column widths and the selected row for its mount lifetime.
/// Remounting (e.g. after switching view modes) starts from the defaults.
#[component]
pub fn DetailView(#[prop(into)] files: Signal<Vec<File>>) -> impl IntoView {
    let state = RwSignal::new(DetailState::new());

    let col_widths = Signal::derive(move || state.with(|s| s.col_widths()));

    // A selection past the end of a shrunk list would point at nothing
    Effect::new(move |_| {
        let len = files.with(|f| f.len());
        if state.with_untracked(|s| s.is_stale(len)) {
            state.update(|s| {
                s.reconcile(len);
            });
        }
    });

    let on_resize_column = Callback::new(move |(column, width): (Column, f64)| {
        state.update(|s| s.resize(column, width));
    });

    let on_background_click = move |_: leptos::ev::MouseEvent| {
        state.update(|s| s.clear_selection());
    };

    view! {
        <div class=css::view role="grid" aria-label="File details">
            <DetailHeader col_widths=col_widths on_resize_column=on_resize_column />
            <div class=css::pane on:click=on_background_click>
                <ForEnumerate
                    each=move || files.get()
                    key=|file| file.name.clone()
                    children=move |index, file| {
                        let selected = Signal::derive(move || {
                            state.with(|s| s.is_selected(index.get()))
                        });
                        let on_select = Callback::new(move |_: ()| {
                            state.update(|s| s.select(index.get_untracked()));
                        });
                        view! {
                            <DetailRow
                                file=file
                                col_widths=col_widths
                                selected=selected
                                on_select=on_select
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
