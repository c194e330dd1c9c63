use super::*;

#[test]
fn rounded_device_pixels_rounds_half_away_from_zero() {
    let conv = DevicePixelConverter::new(1.0);
    assert_eq!(conv.rounded_device_pixels(2.5), 3);
    assert_eq!(conv.rounded_device_pixels(2.49), 2);
    assert_eq!(conv.rounded_device_pixels(-2.5), -3);
}

#[test]
fn rounded_device_rect_scales_by_ratio() {
    let conv = DevicePixelConverter::new(2.0);
    let r = conv.rounded_device_rect(Rect::new(10.25, 5.0, 60.25, 30.0));
    assert_eq!(r, DeviceRect::new(21, 10, 100, 50));
}

#[test]
fn enclosing_device_rect_covers_fractional_edges() {
    let conv = DevicePixelConverter::new(1.0);
    let r = conv.enclosing_device_rect(Rect::new(0.4, 0.6, 10.2, 9.5));
    assert_eq!(r, DeviceRect::new(0, 0, 11, 10));
}

#[test]
fn invalid_ratio_falls_back_to_one() {
    assert_eq!(DevicePixelConverter::new(0.0).ratio(), 1.0);
    assert_eq!(DevicePixelConverter::new(f64::NAN).ratio(), 1.0);
    assert_eq!(DevicePixelConverter::new(-3.0).ratio(), 1.0);
}

#[test]
fn rects_intersect_is_strict() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(rects_intersect(a, Rect::new(5.0, 5.0, 15.0, 15.0)));
    assert!(!rects_intersect(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
    assert!(!rects_intersect(a, Rect::new(2.0, 2.0, 2.0, 8.0)));
}

#[test]
fn device_rect_size_clamps_negative_extents() {
    let r = DeviceRect::new(0, 0, -4, 7);
    assert_eq!(r.size(), DeviceSize::new(0, 7));
    assert!(r.is_empty());
}
