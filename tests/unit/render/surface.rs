use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> DecodedImage {
    DecodedImage {
        width,
        height,
        rgba8_premul: px.repeat((width * height) as usize),
    }
}

#[test]
fn zero_area_surface_is_refused() {
    let err = Surface::new(Canvas::new(0, 10)).unwrap_err();
    assert_eq!((err.width, err.height), (0, 10));
}

#[test]
fn oversized_surface_is_refused() {
    assert!(Surface::new(Canvas::new(100_000, 100_000)).is_err());
}

#[test]
fn new_surface_is_transparent() {
    let s = Surface::new(Canvas::new(2, 2)).unwrap();
    assert_eq!(s.pixel(1, 1), [0, 0, 0, 0]);
}

#[test]
fn same_size_draw_copies_pixels() {
    let mut s = Surface::new(Canvas::new(4, 3)).unwrap();
    let img = solid(4, 3, [10, 20, 30, 255]);
    s.draw_image(&img, Rect::new(0.0, 0.0, 4.0, 3.0)).unwrap();
    assert_eq!(s.pixel(0, 0), [10, 20, 30, 255]);
    assert_eq!(s.pixel(3, 2), [10, 20, 30, 255]);
}

#[test]
fn draw_is_clipped_to_surface() {
    let mut s = Surface::new(Canvas::new(4, 4)).unwrap();
    s.draw_image(&solid(4, 4, [0, 0, 0, 255]), Rect::new(0.0, 0.0, 4.0, 4.0))
        .unwrap();

    let drawn = s
        .draw_image(&solid(2, 2, [255, 0, 0, 255]), Rect::new(-1.0, 3.0, 1.0, 5.0))
        .unwrap();
    assert_eq!(drawn, Rect::new(-1.0, 3.0, 1.0, 5.0));
    assert_eq!(s.pixel(0, 3), [255, 0, 0, 255]);
    assert_eq!(s.pixel(1, 3), [0, 0, 0, 255]);
    assert_eq!(s.pixel(0, 2), [0, 0, 0, 255]);
}

#[test]
fn fully_offscreen_draw_is_noop() {
    let mut s = Surface::new(Canvas::new(2, 2)).unwrap();
    s.draw_image(&solid(2, 2, [255, 255, 255, 255]), Rect::new(5.0, 5.0, 7.0, 7.0))
        .unwrap();
    assert_eq!(s.pixel(0, 0), [0, 0, 0, 0]);
}

#[test]
fn scaled_draw_fills_destination() {
    let mut s = Surface::new(Canvas::new(8, 8)).unwrap();
    let drawn = s
        .draw_image(&solid(16, 16, [0, 255, 0, 255]), Rect::new(2.0, 2.0, 6.0, 6.0))
        .unwrap();
    assert_eq!(drawn, Rect::new(2.0, 2.0, 6.0, 6.0));
    assert_eq!(s.pixel(2, 2), [0, 255, 0, 255]);
    assert_eq!(s.pixel(5, 5), [0, 255, 0, 255]);
    assert_eq!(s.pixel(1, 1), [0, 0, 0, 0]);
    assert_eq!(s.pixel(6, 6), [0, 0, 0, 0]);
}

#[test]
fn zero_size_destination_draws_nothing() {
    let mut s = Surface::new(Canvas::new(2, 2)).unwrap();
    s.draw_image(&solid(2, 2, [255, 255, 255, 255]), Rect::new(0.0, 0.0, 0.0, 2.0))
        .unwrap();
    assert_eq!(s.pixel(0, 0), [0, 0, 0, 0]);
}

#[test]
fn encode_jpeg_has_magic_and_dimensions() {
    let mut s = Surface::new(Canvas::new(10, 6)).unwrap();
    s.draw_image(&solid(10, 6, [200, 100, 50, 255]), Rect::new(0.0, 0.0, 10.0, 6.0))
        .unwrap();
    let jpeg = s.encode_jpeg(95).unwrap();
    assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

    let back = image::load_from_memory(&jpeg).unwrap();
    assert_eq!((back.width(), back.height()), (10, 6));
}
