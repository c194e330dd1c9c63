use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_single_still_frame() {
    let frames = decode_raster(&png_bytes(3, 2, [255, 0, 0, 255])).unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].duration_ms, 0);
    assert_eq!(frames[0].bitmap.size(), DeviceSize::new(3, 2));
    assert_eq!(&frames[0].bitmap.pixels()[..4], &[255, 0, 0, 255]);
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode_raster(b"definitely not an image").is_err());
}

#[test]
fn parse_svg_ok_and_err() {
    let ok = br#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2"></svg>"#;
    let tree = parse_svg(ok).unwrap();
    assert_eq!(tree.size().width(), 4.0);

    assert!(parse_svg(br#"<svg"#).is_err());
}

#[test]
fn rasterize_svg_keeps_aspect_ratio() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
        <rect width="10" height="10" fill="#00ff00"/>
    </svg>"##;
    let tree = parse_svg(svg).unwrap();
    let bmp = rasterize_svg(&tree, DeviceSize::new(40, 20)).unwrap();
    assert_eq!(bmp.size(), DeviceSize::new(40, 20));

    let px = |x: usize, y: usize| {
        let i = (y * 40 + x) * 4;
        bmp.pixels()[i..i + 4].to_vec()
    };
    // 20x20 square centered horizontally: columns 10..30.
    assert_eq!(px(20, 10), [0, 255, 0, 255]);
    assert_eq!(px(11, 1), [0, 255, 0, 255]);
    assert_eq!(px(28, 18), [0, 255, 0, 255]);
    assert_eq!(px(0, 10), [0, 0, 0, 0]);
    assert_eq!(px(39, 10), [0, 0, 0, 0]);
}

#[test]
fn rasterize_svg_rejects_empty_and_huge_sizes() {
    let tree =
        parse_svg(br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#)
            .unwrap();
    assert!(rasterize_svg(&tree, DeviceSize::new(0, 10)).is_err());
    assert!(rasterize_svg(&tree, DeviceSize::new(MAX_VECTOR_RASTER_DIM + 1, 1)).is_err());
}
