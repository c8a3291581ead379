//! Image XObject creation
//!
//! Normalized pixels are zlib-compressed during the parallel phase and then
//! added to the output document as `/Subtype /Image` streams with a
//! `FlateDecode` filter.

use crate::normalize::{NormalizedImage, PixelFormat};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::io::Write;

/// Compressed pixel data, ready to be embedded
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// zlib stream of the raw 8-bit samples
    pub data: Vec<u8>,
}

/// Compress the samples of a normalized image.
pub fn encode_image(image: &NormalizedImage) -> std::io::Result<EncodedImage> {
    let mut enc = ZlibEncoder::new(
        Vec::with_capacity(image.pixels.len() / 2),
        Compression::fast(),
    );
    enc.write_all(&image.pixels)?;

    Ok(EncodedImage {
        width: image.width,
        height: image.height,
        format: image.format,
        data: enc.finish()?,
    })
}

/// Add an image XObject to `output` and return its object id.
pub fn create_image_xobject(output: &mut Document, image: EncodedImage) -> ObjectId {
    let dict = dictionary! {
        "Type" => Object::Name(b"XObject".to_vec()),
        "Subtype" => Object::Name(b"Image".to_vec()),
        "Width" => image.width as i64,
        "Height" => image.height as i64,
        "ColorSpace" => Object::Name(image.format.color_space().as_bytes().to_vec()),
        "BitsPerComponent" => 8,
        "Filter" => Object::Name(b"FlateDecode".to_vec()),
    };
    output.add_object(Stream::new(dict, image.data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    #[test]
    fn test_encode_is_lossless() {
        let image = NormalizedImage {
            width: 2,
            height: 2,
            format: PixelFormat::Gray,
            pixels: vec![0, 64, 128, 255],
        };
        let encoded = encode_image(&image).unwrap();

        let mut decoded = Vec::new();
        ZlibDecoder::new(&encoded.data[..])
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, image.pixels);
    }

    #[test]
    fn test_xobject_dictionary() {
        let image = NormalizedImage {
            width: 3,
            height: 1,
            format: PixelFormat::Rgb,
            pixels: vec![255; 9],
        };
        let mut doc = Document::with_version("1.5");
        let id = create_image_xobject(&mut doc, encode_image(&image).unwrap());

        let stream = doc.get_object(id).unwrap().as_stream().unwrap();
        assert_eq!(stream.dict.get(b"Width").unwrap().as_i64().unwrap(), 3);
        assert_eq!(stream.dict.get(b"Height").unwrap().as_i64().unwrap(), 1);
        assert_eq!(
            stream.dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
            b"DeviceRGB"
        );
        assert_eq!(
            stream.dict.get(b"Filter").unwrap().as_name().unwrap(),
            b"FlateDecode"
        );
    }
}
