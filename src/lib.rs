//! posterkit turns a filled-in poster brief into a finished social media poster.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: a [`FormData`] payload (content, style, platform format) is
//!    rendered into a text-to-image prompt by [`build_prompt`].
//! 2. **Generate**: an external [`PosterGenerator`] turns the prompt into an
//!    encoded poster image. posterkit ships no network client; the generator is
//!    a seam the embedding application fills.
//! 3. **Composite** (optional): when the form carries a logo, [`composite`]
//!    decodes poster and logo, scales the logo into 20% of the poster on each
//!    axis, anchors it from the placement text, and flattens to JPEG (quality 95).
//!
//! [`produce_poster`] runs all three steps.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: overlay size and position depend only on the poster size,
//!   the logo size, and the placement text; the same request yields identical bytes.
//! - **Premultiplied RGBA8** while drawing; transparent output flattens to black.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod layout;
mod poster;
mod render;

pub use assets::decode::{DecodedImage, decode_image};
pub use assets::source::{ImageSource, decode_data_uri, encode_data_uri};
pub use foundation::core::{
    Canvas, DOWNLOAD_FILE_NAME, JPEG_QUALITY, MARGIN_FRACTION, MAX_OVERLAY_FRACTION, Point, Rect,
    Size,
};
pub use foundation::error::{
    CompositeError, DecodeError, ImageRole, PosterError, PosterResult, SurfaceError,
};
pub use layout::placement::{AlignX, AlignY, Placement, resolve_anchor};
pub use layout::scale::{fit_overlay, overlay_bounds};
pub use poster::catalog::{
    BACKGROUND_OPTIONS, COLOR_SCHEMES, FormatSpec, PLATFORMS, PlatformSpec, STYLE_PREFERENCES,
    find_format, find_platform,
};
pub use poster::generator::{
    DEFAULT_IMAGE_MODEL, GenerationRequest, PosterGenerator, StaticPosterGenerator, generate_one,
};
pub use poster::model::{AspectRatio, ContentData, Format, FormData, PlatformData, StyleData};
pub use poster::pipeline::{GENERATION_FAILED_MESSAGE, PosterOutput, produce_poster};
pub use poster::prompt::{STORY_SAFE_ZONE_PX, build_prompt};
pub use render::blend::{PremulRgba8, over};
pub use render::compositor::{
    CompositeRequest, CompositeResult, OverlayLayout, composite, layout_overlay,
};
pub use render::surface::{MAX_SURFACE_PIXELS, Surface};
