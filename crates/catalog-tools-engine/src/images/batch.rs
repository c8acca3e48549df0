use std::{collections::BTreeMap, fmt, io::Cursor, str::FromStr};

use image::{ExtendedColorType, ImageEncoder, ImageFormat, ImageResult, codecs::jpeg::JpegEncoder};
use serde::{Deserialize, Serialize};

use super::codec::{encode, flatten_onto_white};

/// Extensions accepted as conversion input.
pub const INPUT_EXTENSIONS: [&str; 7] = ["webp", "jpg", "jpeg", "png", "bmp", "gif", "tiff"];
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    #[default]
    Png,
    Jpg,
    Bmp,
    Tiff,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 4] = [
        TargetFormat::Png,
        TargetFormat::Jpg,
        TargetFormat::Bmp,
        TargetFormat::Tiff,
    ];

    /// Extension of output files, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Png => "png",
            TargetFormat::Jpg => "jpg",
            TargetFormat::Bmp => "bmp",
            TargetFormat::Tiff => "tiff",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            TargetFormat::Png => ImageFormat::Png,
            TargetFormat::Jpg => ImageFormat::Jpeg,
            TargetFormat::Bmp => ImageFormat::Bmp,
            TargetFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown image format '{0}' (expected png, jpg, bmp or tiff)")]
pub struct UnknownFormat(pub String);

impl FromStr for TargetFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(TargetFormat::Png),
            "jpg" | "jpeg" => Ok(TargetFormat::Jpg),
            "bmp" => Ok(TargetFormat::Bmp),
            "tiff" | "tif" => Ok(TargetFormat::Tiff),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConvertSettings {
    pub format: TargetFormat,
    /// JPEG quality (1-100). Other formats ignore it.
    pub quality: u8,
    /// Prepended to every output name. Empty keeps the input stem as is.
    pub prefix: String,
}

impl Default for ImageConvertSettings {
    fn default() -> Self {
        Self {
            format: TargetFormat::default(),
            quality: DEFAULT_JPEG_QUALITY,
            prefix: String::new(),
        }
    }
}

/// Whether a file name has one of the [`INPUT_EXTENSIONS`].
pub fn is_convertible(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| INPUT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// `<prefix><stem>.<ext>`, where the stem is everything before the last dot.
pub fn output_file_name(input_name: &str, settings: &ImageConvertSettings) -> String {
    let stem = input_name
        .rsplit_once('.')
        .map_or(input_name, |(stem, _)| stem);
    format!("{}{stem}.{}", settings.prefix, settings.format.extension())
}

/// Decodes any supported image and re-encodes it in the target format.
///
/// JPEG has no alpha channel, so transparent images are flattened onto white
/// first. Other targets keep transparency.
pub fn convert_image(bytes: &[u8], settings: &ImageConvertSettings) -> ImageResult<Vec<u8>> {
    let image = image::load_from_memory(bytes)?;

    match settings.format {
        TargetFormat::Jpg => {
            let rgb = if image.color().has_alpha() {
                flatten_onto_white(&image)
            } else {
                image.to_rgb8()
            };
            let mut out = Cursor::new(Vec::new());
            JpegEncoder::new_with_quality(&mut out, settings.quality.clamp(1, 100)).write_image(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                ExtendedColorType::Rgb8,
            )?;
            Ok(out.into_inner())
        }
        format => encode(&image, format.image_format()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFailure {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ImageBatchReport {
    /// Output name → encoded bytes. A later input with the same output name wins.
    pub files: BTreeMap<String, Vec<u8>>,
    pub failures: Vec<ImageFailure>,
}

/// Converts every `(file name, bytes)` input. A file that fails to decode
/// or encode is recorded and the rest carry on.
pub fn convert_images<I>(inputs: I, settings: &ImageConvertSettings) -> ImageBatchReport
where
    I: IntoIterator<Item = (String, Vec<u8>)>,
{
    let mut report = ImageBatchReport::default();

    for (name, bytes) in inputs {
        match convert_image(&bytes, settings) {
            Ok(converted) => {
                report
                    .files
                    .insert(output_file_name(&name, settings), converted);
            }
            Err(e) => {
                log::warn!("{name}: {e}");
                report.failures.push(ImageFailure {
                    name,
                    message: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "images: {} converted to {}, {} failed",
        report.files.len(),
        settings.format,
        report.failures.len()
    );
    report
}
