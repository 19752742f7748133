//! A single file row in the details table.

use leptos::prelude::*;
use panguin_core::{Column, ColumnWidths, File};

stylance::import_crate_style!(css, "src/components/explorer/detail/detail.module.css");

/// One file's name and size at the current column widths.
///
/// A click selects the row and stops there, so the pane's
/// clear-on-background-click handler never sees it.
#[component]
pub fn DetailRow(
    file: File,
    #[prop(into)] col_widths: Signal<ColumnWidths>,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_select.run(());
    };

    let row_class = move || {
        if selected.get() {
            format!("{} {}", css::row, css::selected)
        } else {
            css::row.to_string()
        }
    };

    view! {
        <div
            class=row_class
            role="row"
            aria-selected=move || selected.get().to_string()
            on:click=on_click
        >
            <div
                class=css::cell
                role="gridcell"
                style:width=move || col_widths.get().css(Column::Name)
            >
                {file.name}
            </div>
            <div
                class=format!("{} {}", css::cell, css::sizeCell)
                role="gridcell"
                style:width=move || col_widths.get().css(Column::Size)
            >
                {file.size.to_string()}
            </div>
        </div>
    }
}
