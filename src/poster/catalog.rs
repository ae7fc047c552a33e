use crate::poster::model::AspectRatio::{
    Landscape16x9, Landscape191x100, Portrait4x5, Portrait9x16, Square,
};
use crate::poster::model::{AspectRatio, Format};

/// A static catalog entry: one format of one platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatSpec {
    /// Format name, unique within its platform.
    pub name: &'static str,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// Ratio requested from the generator.
    pub aspect_ratio: AspectRatio,
}

impl FormatSpec {
    const fn new(name: &'static str, width: u32, height: u32, aspect_ratio: AspectRatio) -> Self {
        Self {
            name,
            width,
            height,
            aspect_ratio,
        }
    }

    /// Owned copy for a [`crate::PlatformData`] selection.
    pub fn to_format(self) -> Format {
        Format {
            name: self.name.to_string(),
            width: self.width,
            height: self.height,
            aspect_ratio: self.aspect_ratio,
        }
    }
}

/// A platform and the formats it supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformSpec {
    /// Display name.
    pub name: &'static str,
    /// Offered formats, in display order.
    pub formats: &'static [FormatSpec],
}

/// Every supported platform with its formats.
pub static PLATFORMS: &[PlatformSpec] = &[
    PlatformSpec {
        name: "Facebook",
        formats: &[
            FormatSpec::new("Stories", 1080, 1920, Portrait9x16),
            FormatSpec::new("Feed Post Square", 1080, 1080, Square),
            FormatSpec::new("Feed Post Landscape", 1080, 566, Landscape191x100),
            FormatSpec::new("Feed Post Portrait", 1080, 1350, Portrait4x5),
        ],
    },
    PlatformSpec {
        name: "Instagram",
        formats: &[
            FormatSpec::new("Stories", 1080, 1920, Portrait9x16),
            FormatSpec::new("Feed Square", 1080, 1080, Square),
            FormatSpec::new("Feed Portrait", 1080, 1350, Portrait4x5),
            FormatSpec::new("Reels", 1080, 1920, Portrait9x16),
        ],
    },
    PlatformSpec {
        name: "X (Twitter)",
        formats: &[
            FormatSpec::new("Feed Post", 1200, 675, Landscape16x9),
            FormatSpec::new("Square Post", 1200, 1200, Square),
            FormatSpec::new("Portrait Post", 1080, 1350, Portrait4x5),
        ],
    },
    PlatformSpec {
        name: "LinkedIn",
        formats: &[
            FormatSpec::new("Feed Square", 1200, 1200, Square),
            FormatSpec::new("Feed Landscape", 1200, 627, Landscape191x100),
            FormatSpec::new("Article Cover", 1920, 1080, Landscape16x9),
        ],
    },
    PlatformSpec {
        name: "TikTok",
        formats: &[FormatSpec::new("Video/Story", 1080, 1920, Portrait9x16)],
    },
    PlatformSpec {
        name: "Multi-Platform",
        formats: &[
            FormatSpec::new("Universal Square", 1080, 1080, Square),
            FormatSpec::new("Universal Story", 1080, 1920, Portrait9x16),
        ],
    },
];

/// Suggested values for [`crate::StyleData::style_preference`].
pub static STYLE_PREFERENCES: &[&str] = &[
    "Modern",
    "Vintage",
    "Corporate",
    "Creative",
    "Minimalist",
    "Futuristic",
];

/// Suggested values for [`crate::StyleData::color_scheme`].
pub static COLOR_SCHEMES: &[&str] = &[
    "Professional blue & gray",
    "Vibrant & energetic",
    "Minimalist black & white",
    "Earthy & natural tones",
    "Luxurious gold & black",
    "Playful pastels",
];

/// Suggested values for [`crate::StyleData::background_image`].
pub static BACKGROUND_OPTIONS: &[&str] = &[
    "Clean Solid Color",
    "Subtle Gradient",
    "Abstract Texture",
    "Geometric Pattern",
    "Nature Inspired",
    "Tech/Circuitry",
];

/// Case-insensitive platform lookup.
pub fn find_platform(name: &str) -> Option<&'static PlatformSpec> {
    let name = name.trim();
    PLATFORMS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Case-insensitive lookup of a platform's format by name.
pub fn find_format(platform: &str, format: &str) -> Option<Format> {
    let format = format.trim();
    find_platform(platform)?
        .formats
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(format))
        .map(|f| f.to_format())
}

#[cfg(test)]
#[path = "../../tests/unit/poster/catalog.rs"]
mod tests;
