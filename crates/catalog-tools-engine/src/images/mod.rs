//! # Image Conversion
//!
//! Decoding and re-encoding of product images with the `image` crate.
//!
//! - **`codec`**: alpha flattening onto white, PNG encoding, and the
//!   [`PngTranscoder`] used by cover downloads for WebP files
//! - **`batch`**: converts a set of named images to one target format
//!   (PNG, JPG, BMP or TIFF), renaming each to `<prefix><stem>.<ext>`

pub mod batch;
pub mod codec;

pub use batch::{
    ImageBatchReport, ImageConvertSettings, ImageFailure, TargetFormat, UnknownFormat,
    convert_image, convert_images, is_convertible, output_file_name,
};
pub use codec::{PngTranscoder, flatten_onto_white};
