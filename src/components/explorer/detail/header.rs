//! Column header row for the details table.

use leptos::prelude::*;
use panguin_core::{Column, ColumnWidths};

use super::Divider;

stylance::import_crate_style!(css, "src/components/explorer/detail/detail.module.css");

/// Column titles, each followed by a divider that resizes that column.
///
/// Stateless: clamping is up to whoever handles `on_resize_column`.
#[component]
pub fn DetailHeader(
    #[prop(into)] col_widths: Signal<ColumnWidths>,
    #[prop(into)] on_resize_column: Callback<(Column, f64)>,
) -> impl IntoView {
    let cells = Column::ALL
        .into_iter()
        .map(|column| {
            let width = Signal::derive(move || col_widths.get()[column]);
            view! {
                <div
                    class=css::cell
                    role="columnheader"
                    style:width=move || col_widths.get().css(column)
                >
                    <span class=css::title>{column.title()}</span>
                    <Divider
                        width=width
                        on_resize=move |w: f64| on_resize_column.run((column, w))
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=format!("{} {}", css::row, css::header) role="row">
            {cells}
        </div>
    }
}
