use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageResult, Rgb, RgbImage};

use crate::covers::{ImageTranscoder, TranscodeError};

/// Composites `image` over an opaque white background.
pub fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, px) in rgba.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        let a = u32::from(a);
        let over_white = |c: u8| ((u32::from(c) * a + 255 * (255 - a) + 127) / 255) as u8;
        out.put_pixel(x, y, Rgb([over_white(r), over_white(g), over_white(b)]));
    }
    out
}

/// Flattens images that carry an alpha channel; others pass through.
pub fn without_alpha(image: DynamicImage) -> DynamicImage {
    if image.color().has_alpha() {
        DynamicImage::ImageRgb8(flatten_onto_white(&image))
    } else {
        image
    }
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> ImageResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format)?;
    Ok(out.into_inner())
}

/// Re-encodes downloaded WebP covers as opaque PNG.
///
/// The input format is sniffed, so a `.webp` link that actually serves a
/// JPEG still converts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngTranscoder;

impl ImageTranscoder for PngTranscoder {
    fn webp_to_png(&self, bytes: &[u8]) -> Result<Vec<u8>, TranscodeError> {
        let image = image::load_from_memory(bytes).map_err(|e| TranscodeError(e.to_string()))?;
        encode(&without_alpha(image), ImageFormat::Png).map_err(|e| TranscodeError(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ColorType, Rgba, RgbaImage};
    use pretty_assertions::assert_eq;

    /// 2×1: transparent red, then opaque blue.
    pub(crate) fn half_transparent() -> DynamicImage {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn flattening_blends_over_white() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 128]));

        let flat = flatten_onto_white(&DynamicImage::ImageRgba8(img));

        assert_eq!(flat.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(flat.get_pixel(1, 0), &Rgb([0, 0, 255]));
        assert_eq!(flat.get_pixel(2, 0), &Rgb([127, 127, 127]));
    }

    #[test]
    fn opaque_images_are_not_touched() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([1, 2, 3])));
        assert_eq!(without_alpha(rgb.clone()), rgb);
    }

    #[test]
    fn webp_cover_becomes_opaque_png() {
        let webp = encode(&half_transparent(), ImageFormat::WebP).unwrap();

        let png = PngTranscoder.webp_to_png(&webp).unwrap();

        assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
        let rgb = decoded.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([0, 0, 255]));
    }

    #[test]
    fn garbage_is_a_transcode_error() {
        let err = PngTranscoder.webp_to_png(b"not an image").unwrap_err();
        assert!(!err.0.is_empty());
    }
}
