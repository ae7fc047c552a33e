use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PosterError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PosterError::generation("x")
            .to_string()
            .contains("generation error:")
    );
    assert!(
        PosterError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn decode_error_names_the_failing_input() {
    let err = CompositeError::decode(ImageRole::Overlay, DecodeError::Empty);
    let msg = err.to_string();
    assert!(msg.contains("overlay"));
    assert!(msg.contains("empty"));
}

#[test]
fn surface_error_reports_dimensions() {
    let err = CompositeError::from(SurfaceError::new(0, 10, "zero area"));
    assert!(err.to_string().contains("0x10"));
}

#[test]
fn composite_converts_into_poster_error() {
    let err: PosterError = CompositeError::encode("boom").into();
    assert!(matches!(err, PosterError::Composite(CompositeError::Encode(_))));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PosterError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
