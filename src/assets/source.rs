use std::{borrow::Cow, sync::Arc};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::foundation::error::DecodeError;

const DATA_URI_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// An encoded image handle: raw file bytes or a base64 `data:` URI.
///
/// Sources are immutable and cheap to clone; the payload is only decoded when
/// pixels are needed (see [`crate::decode_image`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// Encoded image bytes (PNG, JPEG, ...).
    Bytes(Arc<[u8]>),
    /// `data:<mime>;base64,<payload>` text.
    DataUri(Arc<str>),
}

impl ImageSource {
    /// Wrap encoded image bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(Arc::from(bytes.into()))
    }

    /// Wrap a `data:` URI. The URI is validated lazily on decode.
    pub fn from_data_uri(uri: impl Into<String>) -> Self {
        Self::DataUri(Arc::from(uri.into()))
    }

    /// Wrap JPEG bytes as a `data:image/jpeg;base64,...` source.
    pub fn jpeg_data_uri(bytes: &[u8]) -> Self {
        Self::from_data_uri(encode_data_uri("image/jpeg", bytes))
    }

    /// The encoded image bytes, decoding the base64 payload of a data URI.
    pub fn encoded_bytes(&self) -> Result<Cow<'_, [u8]>, DecodeError> {
        let bytes = match self {
            Self::Bytes(b) => Cow::Borrowed(b.as_ref()),
            Self::DataUri(uri) => Cow::Owned(decode_data_uri(uri)?.1),
        };
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(bytes)
    }

    /// Render this source as a data URI, tagging raw bytes with `mime`.
    pub fn to_data_uri(&self, mime: &str) -> String {
        match self {
            Self::Bytes(b) => encode_data_uri(mime, b),
            Self::DataUri(uri) => uri.to_string(),
        }
    }
}

/// Encode `bytes` as `data:<mime>;base64,<payload>`.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("{DATA_URI_PREFIX}{mime}{BASE64_MARKER},{}", STANDARD.encode(bytes))
}

/// Split a base64 data URI into its media type and decoded payload.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), DecodeError> {
    let rest = uri
        .trim()
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| DecodeError::DataUri("missing 'data:' prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| DecodeError::DataUri("missing ',' separator".to_string()))?;
    let mime = header
        .strip_suffix(BASE64_MARKER)
        .ok_or_else(|| DecodeError::DataUri("only base64 payloads are supported".to_string()))?;

    let bytes = STANDARD.decode(payload.trim())?;
    Ok((mime.to_string(), bytes))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
