//! Pointer position to spatial gain mapping.

use crate::error::{Result, SlideToneError};

/*
Distance From Center
====================

The control surface is a rectangle. The pointer's distance from its center,
normalized by the center-to-corner distance, becomes a gain:

    +-----------------------+
    |                     ↗ |   corner: 1.0
    |          ·            |   center: 0.0
    |                       |
    +-----------------------+

    dx   = |x - width/2|
    dy   = |y - height/2|
    gain = min(sqrt(dx² + dy²) / sqrt((width/2)² + (height/2)²), 1)

Coordinates are relative to the rectangle's top-left corner. Points outside
the rectangle clamp to 1.0.

A rectangle without area has no center-to-corner distance to divide by. That
is reported as `InvalidGeometry`; the infallible form returns 0.0 (silence)
instead of NaN.
*/

/// Normalized distance of `(x, y)` from the center of a `width` x `height` area.
pub fn try_compute_attenuation(x: f32, y: f32, width: f32, height: f32) -> Result<f32> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(SlideToneError::InvalidGeometry { width, height });
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let dx = (x - center_x).abs();
    let dy = (y - center_y).abs();

    let distance = dx.hypot(dy);
    if distance.is_nan() {
        return Ok(0.0);
    }
    let max_distance = center_x.hypot(center_y);

    Ok((distance / max_distance).min(1.0))
}

/// Like [`try_compute_attenuation`], but degenerate geometry maps to 0.0.
#[inline]
pub fn compute_attenuation(x: f32, y: f32, width: f32, height: f32) -> f32 {
    try_compute_attenuation(x, y, width, height).unwrap_or(0.0)
}
