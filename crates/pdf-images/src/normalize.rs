//! Image normalization ahead of page layout
//!
//! Every source image is decoded, turned by its quarter-turn rotation, and
//! reduced to an opaque 8-bit surface:
//! - images with an alpha channel are composited over white and become RGB
//! - grayscale images stay grayscale
//! - everything else becomes RGB
//!
//! No soft masks are written; every page draws opaque pixels.

use crate::types::Rotation;
use image::{DynamicImage, Rgb, RgbImage, RgbaImage};

/// Channel layout of a normalized surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// One 8-bit luma channel
    Gray,
    /// Three 8-bit channels
    Rgb,
}

impl PixelFormat {
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::Rgb => 3,
        }
    }

    /// Matching PDF device color space name
    pub fn color_space(self) -> &'static str {
        match self {
            PixelFormat::Gray => "DeviceGray",
            PixelFormat::Rgb => "DeviceRGB",
        }
    }
}

/// An opaque, rotated image ready to be placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// Row-major samples, `width * height * format.channels()` bytes
    pub pixels: Vec<u8>,
}

/// Decode `data`, rotate it clockwise by `rotation`, and flatten it.
pub fn normalize_image(
    data: &[u8],
    rotation: Rotation,
) -> std::result::Result<NormalizedImage, image::ImageError> {
    let decoded = image::load_from_memory(data)?;
    log::debug!(
        "Decoded {}x{} {:?} image",
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(normalize_decoded(decoded, rotation))
}

/// Same as [`normalize_image`] for an image that is already decoded.
pub fn normalize_decoded(image: DynamicImage, rotation: Rotation) -> NormalizedImage {
    flatten(rotate(image, rotation))
}

/// Quarter turns never resample, so the canvas grows or shrinks exactly and
/// no pixel is cropped.
fn rotate(image: DynamicImage, rotation: Rotation) -> DynamicImage {
    match rotation {
        Rotation::None => image,
        Rotation::Clockwise90 => image.rotate90(),
        Rotation::Clockwise180 => image.rotate180(),
        Rotation::Clockwise270 => image.rotate270(),
    }
}

fn flatten(image: DynamicImage) -> NormalizedImage {
    let (width, height) = (image.width(), image.height());

    if image.color().has_alpha() {
        let flattened = flatten_onto_white(&image.into_rgba8());
        return NormalizedImage {
            width,
            height,
            format: PixelFormat::Rgb,
            pixels: flattened.into_raw(),
        };
    }

    match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageLuma16(_) => NormalizedImage {
            width,
            height,
            format: PixelFormat::Gray,
            pixels: image.into_luma8().into_raw(),
        },
        other => NormalizedImage {
            width,
            height,
            format: PixelFormat::Rgb,
            pixels: other.into_rgb8().into_raw(),
        },
    }
}

/// Composite an RGBA surface over an opaque white canvas of the same size,
/// using the alpha channel as the blend mask.
pub fn flatten_onto_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        Rgb([
            blend_over_white(r, a),
            blend_over_white(g, a),
            blend_over_white(b, a),
        ])
    })
}

#[inline]
fn blend_over_white(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageFormat, LumaA, Rgba};
    use std::io::Cursor;

    fn encode_png(image: &DynamicImage) -> Vec<u8> {
        let mut buf = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn solid_rgb(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([10, 20, 30])))
    }

    #[test]
    fn test_rotation_round_trip_dimensions() {
        let rotations = [
            Rotation::None,
            Rotation::Clockwise90,
            Rotation::Clockwise180,
            Rotation::Clockwise270,
        ];

        for rotation in rotations {
            let once = normalize_decoded(solid_rgb(64, 40), rotation);
            if rotation.swaps_dimensions() {
                assert_eq!((once.width, once.height), (40, 64));
            } else {
                assert_eq!((once.width, once.height), (64, 40));
            }

            let back = normalize_image(
                &encode_png(&DynamicImage::ImageRgb8(
                    RgbImage::from_raw(once.width, once.height, once.pixels).unwrap(),
                )),
                rotation.inverse(),
            )
            .unwrap();
            assert_eq!(
                (back.width, back.height),
                (64, 40),
                "round trip failed for {:?}",
                rotation
            );
        }
    }

    #[test]
    fn test_rotation_is_clockwise() {
        // Left pixel red, right pixel blue
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 255]));

        let rotated = normalize_decoded(DynamicImage::ImageRgb8(img), Rotation::Clockwise90);
        assert_eq!((rotated.width, rotated.height), (1, 2));
        // Clockwise: the left edge becomes the top edge
        assert_eq!(&rotated.pixels[0..3], &[255, 0, 0]);
        assert_eq!(&rotated.pixels[3..6], &[0, 0, 255]);
    }

    #[test]
    fn test_alpha_flattened_onto_white() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 128]));

        let flat = normalize_image(&encode_png(&DynamicImage::ImageRgba8(img)), Rotation::None)
            .unwrap();

        assert_eq!(flat.format, PixelFormat::Rgb);
        assert_eq!(flat.pixels.len(), 9);
        assert_eq!(&flat.pixels[0..3], &[255, 255, 255]);
        assert_eq!(&flat.pixels[3..6], &[0, 0, 0]);
        assert_eq!(&flat.pixels[6..9], &[127, 127, 127]);
    }

    #[test]
    fn test_luma_alpha_becomes_rgb() {
        let img = image::ImageBuffer::from_pixel(2, 2, LumaA([0u8, 0]));
        let flat = normalize_decoded(DynamicImage::ImageLumaA8(img), Rotation::None);

        assert_eq!(flat.format, PixelFormat::Rgb);
        assert!(flat.pixels.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_gray_stays_gray() {
        let img = GrayImage::from_pixel(4, 3, image::Luma([42]));
        let flat = normalize_decoded(DynamicImage::ImageLuma8(img), Rotation::Clockwise90);

        assert_eq!(flat.format, PixelFormat::Gray);
        assert_eq!((flat.width, flat.height), (3, 4));
        assert_eq!(flat.pixels.len(), 12);
    }

    #[test]
    fn test_undecodable_bytes_fail() {
        assert!(normalize_image(b"definitely not an image", Rotation::None).is_err());
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend_over_white(17, 255), 17);
        assert_eq!(blend_over_white(17, 0), 255);
    }
}
