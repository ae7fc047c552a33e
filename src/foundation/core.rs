pub use kurbo::{Point, Rect, Size};

/// Largest overlay extent on either axis, as a fraction of the canvas extent.
pub const MAX_OVERLAY_FRACTION: f64 = 0.20;

/// Edge margin around an anchored overlay, as a fraction of canvas width.
pub const MARGIN_FRACTION: f64 = 0.05;

/// JPEG quality of composite output (0.95 on a 0..1 scale).
pub const JPEG_QUALITY: u8 = 95;

/// File name offered when a finished poster is saved.
pub const DOWNLOAD_FILE_NAME: &str = "poster.jpeg";

/// Pixel dimensions of a raster surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Extent as a kurbo [`Size`].
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Margin applied uniformly to both axes when anchoring to an edge.
    pub fn margin(self) -> f64 {
        f64::from(self.width) * MARGIN_FRACTION
    }

    /// `width * height`, without overflow.
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
