use std::io::Cursor;

use image::{DynamicImage, ImageDecoder, ImageReader};

use crate::{
    assets::source::ImageSource,
    foundation::{core::Canvas, error::DecodeError},
};

/// Pixel-addressable image in premultiplied RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels, after EXIF orientation is applied.
    pub width: u32,
    /// Height in pixels, after EXIF orientation is applied.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub rgba8_premul: Vec<u8>,
}

impl DecodedImage {
    /// Pixel extent as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Premultiplied RGBA at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.rgba8_premul[i],
            self.rgba8_premul[i + 1],
            self.rgba8_premul[i + 2],
            self.rgba8_premul[i + 3],
        ]
    }
}

/// Decode an image source and convert to premultiplied RGBA8.
///
/// The EXIF orientation tag, when present, is applied so the pixels come out the
/// way a browser displays them.
#[tracing::instrument(level = "debug", skip(source))]
pub fn decode_image(source: &ImageSource) -> Result<DecodedImage, DecodeError> {
    let bytes = source.encoded_bytes()?;
    let mut decoder = ImageReader::new(Cursor::new(&*bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut dyn_img = DynamicImage::from_decoder(decoder)?;
    dyn_img.apply_orientation(orientation);
    tracing::trace!(?orientation, "applied orientation");

    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    tracing::debug!(width, height, "decoded image");
    Ok(DecodedImage {
        width,
        height,
        rgba8_premul,
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
