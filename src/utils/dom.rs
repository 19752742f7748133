//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, EventTarget, MouseEvent, Window};

use crate::error::AppError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Ratio of device pixels to CSS pixels, or 1.0 without a window.
pub fn device_pixel_ratio() -> f64 {
    window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Log a warning to the browser console.
///
/// No-op outside wasm, where the console bindings don't exist.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}

// =============================================================================
// Event Listeners
// =============================================================================

/// A mouse event listener that stays registered for as long as this value lives.
///
/// Dropping the guard removes the listener from its target, so the listener's
/// lifetime is exactly the guard's scope.
pub struct MouseListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl MouseListener {
    /// Register `handler` for `event` on `target`.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(MouseEvent) + 'static,
    ) -> Result<Self, AppError> {
        let callback = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| AppError::ListenerRegistration {
                event,
                reason: format!("{:?}", err),
            })?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for MouseListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
