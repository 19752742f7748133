//! Divider drag arithmetic.
//!
//! A divider reports widths one pointer event at a time. Each move event
//! produces `current + movement / device_pixel_ratio`, where `current` is the
//! owner's width at the moment the event fires and `movement` is the native
//! horizontal movement of that single event. Nothing accumulates between
//! events, so the result is only right if the owner applies every report
//! before the next event arrives.

/// Width a column should take after one pointer move.
///
/// `movement_x` is in device pixels. A device pixel ratio that is not a
/// positive finite number is treated as 1.
pub fn resized_width(current: f64, movement_x: f64, device_pixel_ratio: f64) -> f64 {
    let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    current + movement_x / ratio
}
