use super::*;
use crate::assets::provider::EdgeCollector;

fn solid(w: u32, h: u32) -> Arc<ImmutableBitmap> {
    Arc::new(
        ImmutableBitmap::from_rgba8_premul(w, h, vec![255; (w * h * 4) as usize]).unwrap(),
    )
}

fn animated(durations: &[u32]) -> RasterImageProvider {
    RasterImageProvider::from_frames(
        durations
            .iter()
            .map(|&d| AnimationFrame {
                bitmap: solid(2, 2),
                duration_ms: d,
            })
            .collect(),
    )
}

#[test]
fn pending_has_no_content_until_decoded() {
    let p = RasterImageProvider::pending();
    assert!(!p.is_image_available());
    assert!(p.intrinsic_size().is_none());
    assert!(p.current_image_bitmap_sized(DeviceSize::new(10, 10)).is_none());

    let bmp = solid(6, 3);
    p.set_decoded(vec![AnimationFrame::still(Arc::clone(&bmp))]);
    assert!(p.is_image_available());
    assert_eq!(p.intrinsic_size(), Some(Size::new(6.0, 3.0)));
    let got = p.current_image_bitmap_sized(DeviceSize::new(10, 10)).unwrap();
    assert!(Arc::ptr_eq(&got, &bmp));
}

#[test]
fn animation_only_advances_while_visible() {
    let p = animated(&[50, 50, 50]);
    assert!(p.is_animated());
    assert!(!p.advance_animation(60));
    assert_eq!(p.current_frame_index(), 0);

    p.set_visible_in_viewport(true);
    assert!(p.advance_animation(60));
    assert_eq!(p.current_frame_index(), 1);
    assert!(!p.advance_animation(30));
    assert!(p.advance_animation(20));
    assert_eq!(p.current_frame_index(), 2);

    p.set_visible_in_viewport(false);
    assert!(!p.advance_animation(500));
    assert_eq!(p.current_frame_index(), 2);
}

#[test]
fn animation_wraps_and_clamps_tiny_delays() {
    // 0ms frames play at 100ms each.
    let p = animated(&[0, 0]);
    p.set_visible_in_viewport(true);
    assert!(!p.advance_animation(99));
    assert!(p.advance_animation(1));
    assert_eq!(p.current_frame_index(), 1);
    assert!(p.advance_animation(100));
    assert_eq!(p.current_frame_index(), 0);
    // Whole cycles are skipped.
    assert!(!p.advance_animation(10_000));
    assert_eq!(p.current_frame_index(), 0);
}

#[test]
fn still_image_never_animates() {
    let p = RasterImageProvider::from_bitmap(solid(1, 1));
    p.set_visible_in_viewport(true);
    assert!(!p.is_animated());
    assert!(!p.advance_animation(1_000));
}

#[test]
fn edges_report_every_frame() {
    let p = animated(&[20, 20, 20]);
    let mut visitor = EdgeCollector::new();
    p.visit_provider_edges(&mut visitor);
    assert_eq!(visitor.edges().len(), 3);
}
