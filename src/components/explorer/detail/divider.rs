//! Draggable column divider.
//!
//! Pressing the handle starts a drag session that listens on the whole
//! document, so the drag keeps working when the pointer leaves the handle.

use leptos::prelude::*;
use panguin_core::drag::resized_width;

use crate::error::AppError;
use crate::utils::dom::{self, MouseListener};

stylance::import_crate_style!(css, "src/components/explorer/detail/detail.module.css");

/// Document listeners for one drag, from mouse-down until mouse-up.
///
/// Dropping the session removes both listeners.
struct DragSession {
    _moves: MouseListener,
    _release: MouseListener,
}

impl DragSession {
    fn begin(
        on_move: impl Fn(f64) + 'static,
        on_release: impl Fn() + 'static,
    ) -> Result<Self, AppError> {
        let document = dom::document().ok_or(AppError::NoDocument)?;

        let moves = MouseListener::new(&document, "mousemove", move |ev| {
            on_move(f64::from(ev.movement_x()));
        })?;
        let release = MouseListener::new(&document, "mouseup", move |_| on_release())?;

        Ok(Self {
            _moves: moves,
            _release: release,
        })
    }
}

/// Vertical handle at the right edge of a header cell.
///
/// Reports a new width for its column on every mouse move while dragged. It
/// owns no width itself: `width` is read from the owner on each event.
#[component]
pub fn Divider(
    #[prop(into)] width: Signal<f64>,
    #[prop(into)] on_resize: Callback<f64>,
) -> impl IntoView {
    let session = StoredValue::new_local(None::<DragSession>);

    let on_mouse_down = move |_: leptos::ev::MouseEvent| {
        // Replacing an existing session drops its listeners first
        session.set_value(None);

        let started = DragSession::begin(
            move |movement_x| {
                let next = resized_width(
                    width.get_untracked(),
                    movement_x,
                    dom::device_pixel_ratio(),
                );
                on_resize.run(next);
            },
            move || session.set_value(None),
        );

        match started {
            Ok(drag) => session.set_value(Some(drag)),
            Err(err) => dom::warn(&err.to_string()),
        }
    };

    on_cleanup(move || {
        session.try_update_value(|s| s.take());
    });

    view! {
        <div class=css::divider role="separator" aria-orientation="vertical" on:mousedown=on_mouse_down>
            <div class=css::dividerLine></div>
        </div>
    }
}
