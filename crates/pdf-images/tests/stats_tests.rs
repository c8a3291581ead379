use pdf_images::*;
use std::io::Cursor;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::GrayImage::from_pixel(width, height, image::Luma([128]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn test_statistics_counts_orientations() {
    let items = vec![
        ImageItem::new(ItemId(0), "wide.png", png_bytes(40, 20), 0),
        ImageItem::new(ItemId(1), "tall.png", png_bytes(20, 40), 1),
        ImageItem::new(ItemId(2), "square.png", png_bytes(30, 30), 2),
        ImageItem::new(ItemId(3), "bad.png", b"garbage".to_vec(), 3),
        ImageItem::new(ItemId(4), "tilted.png", png_bytes(20, 40), 4).with_rotation(10),
    ];
    let layout = layout_document(&items, &DocumentOptions::default()).unwrap();
    let stats = calculate_statistics(&layout);

    assert_eq!(stats.pages, 4);
    assert_eq!(stats.landscape_pages, 2);
    assert_eq!(stats.portrait_pages, 2);
    assert_eq!(stats.skipped_items, 1);
    assert_eq!(stats.warnings, 1);
}

#[test]
fn test_statistics_empty_layout() {
    let stats = calculate_statistics(&DocumentLayout::default());
    assert_eq!(stats.pages, 0);
    assert_eq!(stats.portrait_pages, 0);
    assert_eq!(stats.landscape_pages, 0);
}
