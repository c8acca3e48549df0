//! # Block Kinds
//!
//! Block-specific types that own their syntax rules. The classifier calls
//! into these; it never hardcodes `#`, `-` or `1.` itself.

pub mod heading;
pub mod list;
pub mod paragraph;

pub use heading::{Heading, HeadingMatch};
pub use list::{List, ListItem, ListKind};
pub use paragraph::Paragraph;
