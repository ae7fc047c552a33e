use std::io::Cursor;

use image::{RgbImage, RgbaImage, codecs::jpeg::JpegEncoder, imageops::FilterType};

use crate::{
    assets::decode::DecodedImage,
    foundation::{
        core::{Canvas, Rect},
        error::{CompositeError, SurfaceError},
    },
    render::blend::over_row_in_place,
};

/// Upper bound on surface area; larger allocations are refused.
pub const MAX_SURFACE_PIXELS: u64 = 1 << 28;

/// A premultiplied RGBA8 drawing surface, initially fully transparent.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a transparent surface. Zero-area and oversized canvases are refused.
    pub fn new(canvas: Canvas) -> Result<Self, SurfaceError> {
        let Canvas { width, height } = canvas;
        if width == 0 || height == 0 {
            return Err(SurfaceError::new(width, height, "zero-area surface"));
        }
        if canvas.pixel_count() > MAX_SURFACE_PIXELS {
            return Err(SurfaceError::new(
                width,
                height,
                format!("exceeds {MAX_SURFACE_PIXELS} pixels"),
            ));
        }
        let len = usize::try_from(canvas.pixel_count() * 4)
            .map_err(|_| SurfaceError::new(width, height, "size overflows address space"))?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Surface size.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Premultiplied pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Draw `image` into `dest`, resampling to the destination size.
    ///
    /// The destination is snapped to whole pixels and clipped to the surface.
    /// Returns the pixel-snapped rectangle that was targeted.
    pub fn draw_image(&mut self, image: &DecodedImage, dest: Rect) -> Result<Rect, SurfaceError> {
        let x0 = dest.x0.round() as i64;
        let y0 = dest.y0.round() as i64;
        let dw = dest.width().round().max(0.0) as u32;
        let dh = dest.height().round().max(0.0) as u32;
        let snapped = Rect::new(
            x0 as f64,
            y0 as f64,
            x0 as f64 + f64::from(dw),
            y0 as f64 + f64::from(dh),
        );
        if dw == 0 || dh == 0 || image.width == 0 || image.height == 0 {
            return Ok(snapped);
        }

        let resampled;
        let (src, src_w) = if (dw, dh) == (image.width, image.height) {
            (image.rgba8_premul.as_slice(), image.width)
        } else {
            let buf = RgbaImage::from_raw(image.width, image.height, image.rgba8_premul.clone())
                .ok_or_else(|| {
                    SurfaceError::new(image.width, image.height, "pixel buffer size mismatch")
                })?;
            resampled = image::imageops::resize(&buf, dw, dh, FilterType::Triangle).into_raw();
            (resampled.as_slice(), dw)
        };

        let cols_start = x0.max(0);
        let cols_end = (x0 + i64::from(dw)).min(i64::from(self.width));
        let rows_start = y0.max(0);
        let rows_end = (y0 + i64::from(dh)).min(i64::from(self.height));
        if cols_start >= cols_end || rows_start >= rows_end {
            return Ok(snapped);
        }

        let row_bytes = ((cols_end - cols_start) * 4) as usize;
        let src_stride = src_w as usize * 4;
        let dst_stride = self.width as usize * 4;
        for dy in rows_start..rows_end {
            let sy = (dy - y0) as usize;
            let sx = (cols_start - x0) as usize;
            let s = sy * src_stride + sx * 4;
            let d = dy as usize * dst_stride + cols_start as usize * 4;
            over_row_in_place(&mut self.data[d..d + row_bytes], &src[s..s + row_bytes]);
        }

        Ok(snapped)
    }

    /// Serialize as baseline JPEG. Transparent pixels flatten against black.
    pub fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, CompositeError> {
        // Premultiplied color over black is the color channels themselves.
        let rgb: Vec<u8> = self
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        let img = RgbImage::from_raw(self.width, self.height, rgb)
            .ok_or_else(|| CompositeError::encode("rgb buffer size mismatch"))?;

        let mut buf = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
        img.write_with_encoder(encoder)
            .map_err(|e| CompositeError::encode(format!("JPEG encode failed: {e}")))?;
        Ok(buf.into_inner())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
