use super::*;

#[test]
fn margin_is_five_percent_of_width() {
    assert_eq!(Canvas::new(1080, 1920).margin(), 54.0);
    assert_eq!(Canvas::new(1000, 1000).margin(), 50.0);
}

#[test]
fn size_and_pixel_count() {
    let c = Canvas::new(1200, 675);
    assert_eq!(c.size(), Size::new(1200.0, 675.0));
    assert_eq!(c.pixel_count(), 810_000);
}
