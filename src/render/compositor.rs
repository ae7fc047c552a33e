use crate::{
    assets::{
        decode::decode_image,
        source::{ImageSource, encode_data_uri},
    },
    foundation::{
        core::{Canvas, JPEG_QUALITY, Point, Rect, Size},
        error::{CompositeError, ImageRole},
    },
    layout::{placement::Placement, scale::fit_overlay},
    render::surface::Surface,
};

/// One logo-on-poster compositing job. Consumed by [`composite`].
#[derive(Clone, Debug)]
pub struct CompositeRequest {
    /// Poster drawn at the origin; its size becomes the output size.
    pub base: ImageSource,
    /// Logo drawn on top of the poster.
    pub overlay: ImageSource,
    /// Free-text placement such as `"Bottom right corner"`.
    pub placement: String,
}

impl CompositeRequest {
    /// Bundle the two images with a placement description.
    pub fn new(base: ImageSource, overlay: ImageSource, placement: impl Into<String>) -> Self {
        Self {
            base,
            overlay,
            placement: placement.into(),
        }
    }
}

/// Final size and position of an overlay on a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayLayout {
    /// Placement parsed from the request text.
    pub placement: Placement,
    /// Scaled overlay size, never larger than the natural size.
    pub size: Size,
    /// Top-left corner on the canvas.
    pub anchor: Point,
}

impl OverlayLayout {
    /// Unsnapped destination rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.anchor, self.size)
    }
}

/// Scale an overlay into the canvas bounds, then anchor the scaled box.
///
/// Placement always sees the scaled size, never the natural one.
pub fn layout_overlay(canvas: Canvas, overlay_natural: Size, placement: &str) -> OverlayLayout {
    let size = fit_overlay(overlay_natural, canvas.size());
    let placement = Placement::parse(placement);
    let anchor = placement.anchor(canvas.size(), size, canvas.margin());
    OverlayLayout {
        placement,
        size,
        anchor,
    }
}

/// A flattened poster-with-logo, JPEG encoded at [`JPEG_QUALITY`].
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeResult {
    jpeg: Vec<u8>,
    canvas: Canvas,
    overlay: OverlayLayout,
}

impl CompositeResult {
    /// Encoded JPEG.
    pub fn jpeg_bytes(&self) -> &[u8] {
        &self.jpeg
    }

    /// Take the encoded JPEG.
    pub fn into_jpeg(self) -> Vec<u8> {
        self.jpeg
    }

    /// Output size; always the base image size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Where the logo was placed.
    pub fn overlay(&self) -> OverlayLayout {
        self.overlay
    }

    /// `data:image/jpeg;base64,...` form, for display.
    pub fn to_data_uri(&self) -> String {
        encode_data_uri("image/jpeg", &self.jpeg)
    }

    /// Reuse the JPEG as an [`ImageSource`], e.g. to composite again.
    pub fn into_image_source(self) -> ImageSource {
        ImageSource::from_bytes(self.jpeg)
    }
}

/// Composite a logo onto a poster and encode the result as JPEG.
///
/// Both inputs are decoded concurrently and joined before any drawing starts.
/// On failure nothing is returned; there is no partial output.
#[tracing::instrument(skip(request), fields(placement = %request.placement))]
pub fn composite(request: CompositeRequest) -> Result<CompositeResult, CompositeError> {
    let CompositeRequest {
        base,
        overlay,
        placement,
    } = request;

    let (base, overlay) = rayon::join(|| decode_image(&base), || decode_image(&overlay));
    let base = base.map_err(|e| CompositeError::decode(ImageRole::Base, e))?;
    let overlay = overlay.map_err(|e| CompositeError::decode(ImageRole::Overlay, e))?;

    let canvas = base.canvas();
    let mut surface = Surface::new(canvas)?;
    surface.draw_image(&base, Rect::from_origin_size(Point::ORIGIN, canvas.size()))?;
    drop(base);

    let layout = layout_overlay(canvas, overlay.canvas().size(), &placement);
    tracing::debug!(
        placement = ?layout.placement,
        width = layout.size.width,
        height = layout.size.height,
        x = layout.anchor.x,
        y = layout.anchor.y,
        "overlay layout"
    );
    surface.draw_image(&overlay, layout.rect())?;

    let jpeg = surface.encode_jpeg(JPEG_QUALITY)?;
    tracing::info!(
        width = canvas.width,
        height = canvas.height,
        bytes = jpeg.len(),
        "composite encoded"
    );

    Ok(CompositeResult {
        jpeg,
        canvas,
        overlay: layout,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
