use crate::foundation::core::{MAX_OVERLAY_FRACTION, Size};

/// Largest overlay box allowed on a canvas of the given size.
pub fn overlay_bounds(canvas: Size) -> Size {
    Size::new(
        canvas.width * MAX_OVERLAY_FRACTION,
        canvas.height * MAX_OVERLAY_FRACTION,
    )
}

/// Shrink an overlay so it fits within [`overlay_bounds`], keeping its aspect ratio.
///
/// Width is clamped first, then the (possibly already reduced) height. Overlays
/// that already fit are returned unchanged; nothing is ever enlarged.
pub fn fit_overlay(natural: Size, canvas: Size) -> Size {
    let max = overlay_bounds(canvas);
    let ratio = natural.width / natural.height;

    let mut width = natural.width;
    let mut height = natural.height;

    if width > max.width {
        width = max.width;
        height = width / ratio;
    }
    if height > max.height {
        height = max.height;
        width = height * ratio;
    }

    Size::new(width, height)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scale.rs"]
mod tests;
