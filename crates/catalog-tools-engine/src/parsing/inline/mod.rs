//! # Inline Formatting
//!
//! Rewrites emphasis markup inside a single text fragment (a heading, a list
//! item, or a joined paragraph). Runs after block classification, so it never
//! changes block structure.
//!
//! ## Modules
//!
//! - **`kinds`**: `Strong` and `Emphasis` with their patterns and tags
//! - **`formatter`**: `format_inline()` applying the ordered rewrite passes

pub mod formatter;
pub mod kinds;

pub use formatter::format_inline;
