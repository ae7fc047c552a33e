use std::fmt::Write as _;

use crate::poster::model::FormData;

/// Pixels at the top and bottom of a story format kept free of key content.
pub const STORY_SAFE_ZONE_PX: u32 = 250;

const NOT_AVAILABLE: &str = "N/A";
const DEFAULT_BRAND_COLORS: &str = "Use the primary color scheme.";
const DEFAULT_FONT: &str = "Choose a font that matches the overall style.";
const DEFAULT_BRAND_PLACEMENT: &str = "Place the brand name in a subtle but visible corner.";

/// Render the text-to-image brief for a filled-in form.
///
/// When a logo will be composited afterwards the brief leaves the brand name
/// out and asks for negative space where the logo goes instead. Optional lines
/// that do not apply still leave an empty line behind, and the brief opens with
/// a newline.
pub fn build_prompt(form: &FormData) -> String {
    let FormData {
        content,
        style,
        platform,
    } = form;
    let has_logo = style.has_logo();
    let is_story = platform.format.as_ref().is_some_and(|f| f.is_story());

    let mut out = String::new();
    out.push_str(
        "\nCreate a high-resolution, professional social media poster with the following \
         specifications. The poster must be visually striking, well-composed, and adhere \
         strictly to all requirements.\n\n",
    );

    out.push_str("**1. Core Content:**\n");
    line(
        &mut out,
        format_args!(
            "**Main Headline:** \"{}\" (This must be the most prominent text element).",
            content.headline
        ),
    );
    line(
        &mut out,
        format_args!(
            "**Subtitle/Description:** \"{}\"",
            or_default(&content.subtitle, NOT_AVAILABLE)
        ),
    );
    line(
        &mut out,
        format_args!("**Key Message / Call-to-Action:** \"{}\"", content.cta),
    );
    if has_logo {
        out.push('\n');
    } else {
        line(
            &mut out,
            format_args!("**Brand Name / Logo Text:** \"{}\"", content.brand_name),
        );
    }
    line(
        &mut out,
        format_args!(
            "**Additional Text Elements:** \"{}\"",
            or_default(&content.additional_text, NOT_AVAILABLE)
        ),
    );

    out.push_str("\n**2. Visual & Style Direction:**\n");
    line(
        &mut out,
        format_args!("**Overall Style:** {}.", style.style_preference),
    );
    line(
        &mut out,
        format_args!("**Color Scheme:** {}.", style.color_scheme),
    );
    line(
        &mut out,
        format_args!("**Background:** {}.", style.background_image),
    );
    line(
        &mut out,
        format_args!(
            "**Image/Graphic Requirements:** {}. (This should complement the background style).",
            style.image_requirements
        ),
    );

    out.push_str("\n**3. Brand Guidelines (if provided):**\n");
    line(
        &mut out,
        format_args!(
            "**Brand Colors:** \"{}\"",
            or_default(&style.brand_colors, DEFAULT_BRAND_COLORS)
        ),
    );
    line(
        &mut out,
        format_args!(
            "**Font Preferences:** \"{}\"",
            or_default(&style.font_preference, DEFAULT_FONT)
        ),
    );
    if has_logo {
        line(
            &mut out,
            format_args!(
                "**Logo Placement:** A visual logo will be added later. IMPORTANT: Leave a \
                 suitable amount of negative space in the {} area of the poster to accommodate \
                 a logo. The design should feel balanced with this space reserved.",
                style.logo_placement
            ),
        );
    } else {
        line(
            &mut out,
            format_args!(
                "**Logo Placement:** \"{}\"",
                or_default(&style.logo_placement, DEFAULT_BRAND_PLACEMENT)
            ),
        );
    }

    out.push_str("\n**4. Layout & Composition Rules:**\n");
    for rule in [
        "**Hierarchy:** The text hierarchy is critical. Headline > Subtitle > CTA > Brand Name.",
        "**Readability:** All text must be highly legible, even at thumbnail size on mobile devices.",
        "**White Space:** Use adequate margins and white space to avoid a cluttered look.",
        "**Resolution:** The output must be high-resolution and sharp.",
        "**Format:** The final image must be clean, with no artifacts or watermarks.",
    ] {
        line(&mut out, format_args!("{rule}"));
    }

    out.push_str("\n**5. Platform-Specific Constraints:**\n");
    if is_story {
        line(
            &mut out,
            format_args!(
                "**CRITICAL: This is a Story format (9:16 ratio).** Keep all critical text and \
                 elements within a central \"safe zone,\" avoiding the top and bottom \
                 {STORY_SAFE_ZONE_PX} pixels to prevent being obscured by social media UI elements."
            ),
        );
    } else {
        out.push('\n');
    }

    out.push_str("\nGenerate the poster based *only* on these instructions.\n");
    out
}

fn line(out: &mut String, args: std::fmt::Arguments<'_>) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "- {args}");
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/poster/prompt.rs"]
mod tests;
