use crate::foundation::{
    core::Canvas,
    error::{PosterError, PosterResult},
};

/// Everything the user told the wizard about the poster they want.
///
/// Serialized with the camelCase field names of the wizard's JSON payload.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormData {
    /// Step one: poster text.
    pub content: ContentData,
    /// Step two: look and feel.
    pub style: StyleData,
    /// Step three: where the poster will be posted.
    pub platform: PlatformData,
}

/// Text that appears on the poster.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentData {
    /// Most prominent text on the poster.
    pub headline: String,
    /// Optional; the brief says `N/A` when empty.
    pub subtitle: String,
    /// Call to action.
    pub cta: String,
    /// Printed on the poster only when no logo image is supplied.
    pub brand_name: String,
    /// Optional extra copy.
    pub additional_text: String,
}

/// Visual direction, brand guidelines, and the optional logo.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleData {
    /// One of [`crate::COLOR_SCHEMES`], or free text.
    pub color_scheme: String,
    /// One of [`crate::STYLE_PREFERENCES`], or free text.
    pub style_preference: String,
    /// Imagery the poster should show.
    pub image_requirements: String,
    /// One of [`crate::BACKGROUND_OPTIONS`], or free text.
    pub background_image: String,
    /// Optional brand colours.
    pub brand_colors: String,
    /// Optional font direction.
    pub font_preference: String,
    /// Free-text position such as `"Bottom right corner"`; see [`crate::Placement::parse`].
    pub logo_placement: String,
    /// Logo as a `data:` URI, composited after generation when present.
    pub logo_image: Option<String>,
}

impl StyleData {
    /// True when a logo URI is present and not blank.
    ///
    /// A whitespace-only value counts as no logo: the brief keeps the brand name
    /// and nothing is composited.
    pub fn has_logo(&self) -> bool {
        self.logo_image.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// Target platform and the chosen output format.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformData {
    /// Display name, e.g. `"Instagram"`.
    pub platform_name: String,
    /// Required before generation; see [`FormData::format`].
    pub format: Option<Format>,
}

/// A named output format of a platform.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    /// Format name within its platform, e.g. `"Stories"`.
    pub name: String,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// Ratio sent to the generator.
    pub aspect_ratio: AspectRatio,
}

impl Format {
    /// Pixel size of the format.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Vertical story/reel formats reserve a UI safe zone.
    pub fn is_story(&self) -> bool {
        self.aspect_ratio == AspectRatio::Portrait9x16
    }
}

/// Aspect ratios understood by the external generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    /// `1:1`
    #[serde(rename = "1:1")]
    Square,
    /// `9:16`, the story/reel shape.
    #[serde(rename = "9:16")]
    Portrait9x16,
    /// `16:9`
    #[serde(rename = "16:9")]
    Landscape16x9,
    /// `4:5`
    #[serde(rename = "4:5")]
    Portrait4x5,
    /// `1.91:1`
    #[serde(rename = "1.91:1")]
    Landscape191x100,
}

impl AspectRatio {
    /// Wire string, as sent to the generator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait9x16 => "9:16",
            Self::Landscape16x9 => "16:9",
            Self::Portrait4x5 => "4:5",
            Self::Landscape191x100 => "1.91:1",
        }
    }

    /// Inverse of [`AspectRatio::as_str`], ignoring surrounding whitespace.
    pub fn parse(s: &str) -> PosterResult<Self> {
        match s.trim() {
            "1:1" => Ok(Self::Square),
            "9:16" => Ok(Self::Portrait9x16),
            "16:9" => Ok(Self::Landscape16x9),
            "4:5" => Ok(Self::Portrait4x5),
            "1.91:1" => Ok(Self::Landscape191x100),
            other => Err(PosterError::validation(format!(
                "unsupported aspect ratio '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormData {
    /// Parse a wizard payload from JSON.
    pub fn from_json(json: &str) -> PosterResult<Self> {
        serde_json::from_str(json).map_err(|e| PosterError::serde(e.to_string()))
    }

    /// The selected format, or a validation error if none was chosen.
    pub fn format(&self) -> PosterResult<&Format> {
        self.platform
            .format
            .as_ref()
            .ok_or_else(|| PosterError::validation("platform format not selected"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/poster/model.rs"]
mod tests;
