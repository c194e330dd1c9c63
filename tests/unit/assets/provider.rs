use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn edge_collector_keeps_order() {
    let mut c = EdgeCollector::new();
    c.visit_edge(ResourceId(7));
    c.visit_edge(ResourceId(3));
    assert_eq!(c.edges(), &[ResourceId(7), ResourceId(3)]);
    assert_eq!(c.into_edges(), vec![ResourceId(7), ResourceId(3)]);
}

#[test]
fn decode_sniffs_raster() {
    let content = ImageContent::decode(&png_bytes(5, 4)).unwrap();
    assert!(!content.is_vector());
    assert!(content.is_image_available());
    assert_eq!(content.intrinsic_size(), Some(Size::new(5.0, 4.0)));
    // Raster content ignores the requested size.
    let bmp = content
        .current_image_bitmap_sized(DeviceSize::new(50, 40))
        .unwrap();
    assert_eq!(bmp.size(), DeviceSize::new(5, 4));
}

#[test]
fn decode_falls_back_to_svg() {
    let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20"/>"#;
    let content = ImageContent::decode(svg).unwrap();
    assert!(content.is_vector());
    assert_eq!(content.intrinsic_size(), Some(Size::new(10.0, 20.0)));
    let bmp = content
        .current_image_bitmap_sized(DeviceSize::new(30, 60))
        .unwrap();
    assert_eq!(bmp.size(), DeviceSize::new(30, 60));
}

#[test]
fn decode_rejects_unknown_bytes() {
    assert!(ImageContent::decode(b"\x00\x01 not an image").is_err());
}

#[test]
fn content_delegates_visibility_and_edges() {
    let bmp = Arc::new(ImmutableBitmap::from_rgba8_premul(1, 1, vec![0; 4]).unwrap());
    let content = ImageContent::from(RasterImageProvider::from_bitmap(Arc::clone(&bmp)));

    content.set_visible_in_viewport(true);
    match &content {
        ImageContent::Raster(p) => assert!(p.is_visible_in_viewport()),
        ImageContent::Vector(_) => unreachable!(),
    }

    let mut c = EdgeCollector::new();
    content.visit_provider_edges(&mut c);
    assert_eq!(c.edges(), &[bmp.id()]);
}
