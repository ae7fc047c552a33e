use super::*;

const PAYLOAD: &str = r#"{
  "content": {
    "headline": "Summer Sale",
    "subtitle": "Up to 50% off",
    "cta": "Shop now",
    "brandName": "Acme",
    "additionalText": ""
  },
  "style": {
    "colorScheme": "Vibrant & energetic",
    "stylePreference": "Modern",
    "imageRequirements": "beach scene",
    "backgroundImage": "Subtle Gradient",
    "brandColors": "",
    "fontPreference": "",
    "logoPlacement": "Bottom right corner",
    "logoImage": null
  },
  "platform": {
    "platformName": "Instagram",
    "format": { "name": "Stories", "width": 1080, "height": 1920, "aspectRatio": "9:16" }
  }
}"#;

#[test]
fn parses_camel_case_payload() {
    let form = FormData::from_json(PAYLOAD).unwrap();
    assert_eq!(form.content.brand_name, "Acme");
    assert_eq!(form.style.logo_placement, "Bottom right corner");
    assert!(!form.style.has_logo());

    let format = form.format().unwrap();
    assert_eq!(format.canvas(), Canvas::new(1080, 1920));
    assert_eq!(format.aspect_ratio, AspectRatio::Portrait9x16);
    assert!(format.is_story());
}

#[test]
fn missing_format_is_a_validation_error() {
    let form = FormData::default();
    assert!(matches!(form.format(), Err(PosterError::Validation(_))));
}

#[test]
fn bad_json_is_a_serde_error() {
    assert!(matches!(
        FormData::from_json("{ not json"),
        Err(PosterError::Serde(_))
    ));
}

#[test]
fn aspect_ratio_strings_match_wire_names() {
    for ratio in [
        AspectRatio::Square,
        AspectRatio::Portrait9x16,
        AspectRatio::Landscape16x9,
        AspectRatio::Portrait4x5,
        AspectRatio::Landscape191x100,
    ] {
        let json = serde_json::to_string(&ratio).unwrap();
        assert_eq!(json, format!("\"{}\"", ratio.as_str()));
        assert_eq!(AspectRatio::parse(ratio.as_str()).unwrap(), ratio);
    }
    assert!(AspectRatio::parse("3:2").is_err());
}

#[test]
fn blank_logo_does_not_count() {
    let style = StyleData {
        logo_image: Some("   ".to_string()),
        ..StyleData::default()
    };
    assert!(!style.has_logo());
}

#[test]
fn empty_and_missing_logo_do_not_count() {
    let mut style = StyleData::default();
    assert!(!style.has_logo());
    style.logo_image = Some(String::new());
    assert!(!style.has_logo());
    style.logo_image = Some("data:image/png;base64,AA==".to_string());
    assert!(style.has_logo());
}
