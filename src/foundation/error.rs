/// Convenience result type used across posterkit.
pub type PosterResult<T> = Result<T, PosterError>;

/// Which input of a composite request an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageRole {
    /// The generated poster drawn at the origin.
    Base,
    /// The logo drawn on top of the poster.
    Overlay,
}

impl std::fmt::Display for ImageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Overlay => f.write_str("overlay"),
        }
    }
}

/// An image source could not be turned into pixels.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The source carried no bytes at all.
    #[error("image source is empty")]
    Empty,

    /// The source looked like a `data:` URI but was not well formed.
    #[error("malformed data uri: {0}")]
    DataUri(String),

    /// The base64 payload of a data URI did not decode.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The bytes are not a readable image.
    #[error("unreadable image: {0}")]
    Image(#[from] image::ImageError),
}

/// The output drawing surface could not be allocated.
#[derive(thiserror::Error, Debug)]
#[error("drawing surface unavailable ({width}x{height}): {reason}")]
pub struct SurfaceError {
    /// Requested surface width in pixels.
    pub width: u32,
    /// Requested surface height in pixels.
    pub height: u32,
    /// Why the allocation was refused.
    pub reason: String,
}

impl SurfaceError {
    /// Build a [`SurfaceError`] for the given dimensions.
    pub fn new(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self {
            width,
            height,
            reason: reason.into(),
        }
    }
}

/// Terminal failure of a single composite attempt.
#[derive(thiserror::Error, Debug)]
pub enum CompositeError {
    /// One of the two inputs failed to decode.
    #[error("failed to decode {role} image: {source}")]
    Decode {
        /// Which input failed.
        role: ImageRole,
        /// Underlying decode failure.
        #[source]
        source: DecodeError,
    },

    /// The output surface could not be allocated.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// The composed surface could not be serialized.
    #[error("failed to encode composite: {0}")]
    Encode(String),
}

impl CompositeError {
    /// Build a [`CompositeError::Decode`] value.
    pub fn decode(role: ImageRole, source: DecodeError) -> Self {
        Self::Decode { role, source }
    }

    /// Build a [`CompositeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

/// Top-level error taxonomy used by the poster pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PosterError {
    /// Invalid user-provided form data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The external poster generator failed or returned nothing.
    #[error("generation error: {0}")]
    Generation(String),

    /// Logo compositing failed.
    #[error("composite error: {0}")]
    Composite(#[from] CompositeError),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PosterError {
    /// Build a [`PosterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PosterError::Generation`] value.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Build a [`PosterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
