pub mod archive;
pub mod catalog;
pub mod convert;
pub mod covers;
pub mod ean;
pub mod html;
pub mod images;
pub mod io;
pub mod options;
pub mod parsing;

// Re-export key types for easier usage
pub use catalog::{
    DescriptionReport, DescriptionRow, DescriptionStats, HtmlRecord, convert_descriptions,
};
pub use convert::text_to_html;
pub use ean::{EanFilter, normalize_identifier, parse_ean_list};
pub use options::ConversionOptions;
pub use parsing::blocks::Block;
