use super::*;
use crate::poster::{
    catalog::find_format,
    model::{ContentData, PlatformData, StyleData},
};

fn form(format: &str, logo: Option<&str>) -> FormData {
    FormData {
        content: ContentData {
            headline: "Grand Opening".to_string(),
            subtitle: String::new(),
            cta: "Visit us".to_string(),
            brand_name: "Bean There".to_string(),
            additional_text: "Free coffee".to_string(),
        },
        style: StyleData {
            color_scheme: "Earthy & natural tones".to_string(),
            style_preference: "Vintage".to_string(),
            image_requirements: "coffee cups".to_string(),
            background_image: "Abstract Texture".to_string(),
            brand_colors: String::new(),
            font_preference: "Serif".to_string(),
            logo_placement: "top left".to_string(),
            logo_image: logo.map(str::to_string),
        },
        platform: PlatformData {
            platform_name: "Instagram".to_string(),
            format: find_format("Instagram", format),
        },
    }
}

#[test]
fn without_logo_names_the_brand() {
    let prompt = build_prompt(&form("Feed Square", None));
    assert!(prompt.contains("- **Main Headline:** \"Grand Opening\""));
    assert!(prompt.contains("- **Brand Name / Logo Text:** \"Bean There\""));
    assert!(prompt.contains("- **Logo Placement:** \"top left\""));
    assert!(!prompt.contains("negative space"));
}

#[test]
fn with_logo_reserves_space_instead() {
    let prompt = build_prompt(&form("Feed Square", Some("data:image/png;base64,AA==")));
    assert!(!prompt.contains("Brand Name / Logo Text"));
    assert!(prompt.contains("negative space in the top left area"));
}

#[test]
fn empty_fields_fall_back() {
    let mut f = form("Feed Square", None);
    f.style.logo_placement = String::new();
    let prompt = build_prompt(&f);
    assert!(prompt.contains("**Subtitle/Description:** \"N/A\""));
    assert!(prompt.contains("\"Use the primary color scheme.\""));
    assert!(prompt.contains("\"Serif\""));
    assert!(prompt.contains("subtle but visible corner"));
}

#[test]
fn story_formats_add_safe_zone() {
    let story = build_prompt(&form("Stories", None));
    assert!(story.contains("Story format (9:16 ratio)"));
    assert!(story.contains("top and bottom 250 pixels"));

    let square = build_prompt(&form("Feed Square", None));
    assert!(!square.contains("safe zone"));
}

#[test]
fn sections_appear_in_order() {
    let prompt = build_prompt(&form("Feed Portrait", None));
    let idx = |needle: &str| prompt.find(needle).unwrap();
    assert!(idx("**1. Core Content:**") < idx("**2. Visual & Style Direction:**"));
    assert!(idx("**2. Visual") < idx("**3. Brand Guidelines"));
    assert!(idx("**3. Brand") < idx("**4. Layout & Composition Rules:**"));
    assert!(idx("**4. Layout") < idx("**5. Platform-Specific Constraints:**"));
    assert!(prompt.trim_end().ends_with("on these instructions."));
}

#[test]
fn skipped_lines_leave_blank_lines() {
    let prompt = build_prompt(&form("Feed Square", Some("data:image/png;base64,AA==")));
    assert!(prompt.starts_with("\nCreate a high-resolution"));
    assert!(prompt.contains(
        "- **Key Message / Call-to-Action:** \"Visit us\"\n\n- **Additional Text Elements:**"
    ));
    assert!(prompt.ends_with(
        "**5. Platform-Specific Constraints:**\n\n\nGenerate the poster based *only* on these instructions.\n"
    ));
}

#[test]
fn story_line_closes_constraints_section() {
    let prompt = build_prompt(&form("Stories", None));
    assert!(prompt.contains("\"Bean There\"\n- **Additional Text Elements:**"));
    assert!(prompt.ends_with(
        "social media UI elements.\n\nGenerate the poster based *only* on these instructions.\n"
    ));
}

#[test]
fn whitespace_only_field_is_kept_verbatim() {
    let mut f = form("Feed Square", None);
    f.content.subtitle = " ".to_string();
    let prompt = build_prompt(&f);
    assert!(prompt.contains("**Subtitle/Description:** \" \""));
}

#[test]
fn square_brief_matches_template_exactly() {
    let mut f = form("Feed Square", None);
    f.content.additional_text = String::new();
    let expected = "
Create a high-resolution, professional social media poster with the following specifications. The poster must be visually striking, well-composed, and adhere strictly to all requirements.

**1. Core Content:**
- **Main Headline:** \"Grand Opening\" (This must be the most prominent text element).
- **Subtitle/Description:** \"N/A\"
- **Key Message / Call-to-Action:** \"Visit us\"
- **Brand Name / Logo Text:** \"Bean There\"
- **Additional Text Elements:** \"N/A\"

**2. Visual & Style Direction:**
- **Overall Style:** Vintage.
- **Color Scheme:** Earthy & natural tones.
- **Background:** Abstract Texture.
- **Image/Graphic Requirements:** coffee cups. (This should complement the background style).

**3. Brand Guidelines (if provided):**
- **Brand Colors:** \"Use the primary color scheme.\"
- **Font Preferences:** \"Serif\"
- **Logo Placement:** \"top left\"

**4. Layout & Composition Rules:**
- **Hierarchy:** The text hierarchy is critical. Headline > Subtitle > CTA > Brand Name.
- **Readability:** All text must be highly legible, even at thumbnail size on mobile devices.
- **White Space:** Use adequate margins and white space to avoid a cluttered look.
- **Resolution:** The output must be high-resolution and sharp.
- **Format:** The final image must be clean, with no artifacts or watermarks.

**5. Platform-Specific Constraints:**


Generate the poster based *only* on these instructions.
";
    assert_eq!(build_prompt(&f), expected);
}
