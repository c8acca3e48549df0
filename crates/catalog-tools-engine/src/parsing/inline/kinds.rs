//! # Inline Kinds
//!
//! Inline span types that own their delimiters and output tags.
//!
//! - **`Strong`**: `**text**` or `__text__` → `<strong>`
//! - **`Emphasis`**: `*text*` or `_text_` → `<em>`
//!
//! The formatter reads patterns and tags from here; it never hardcodes
//! `**` or `<em>` itself.

/// Bold span.
pub struct Strong;

impl Strong {
    pub const TAG: &'static str = "strong";
    /// Non-greedy, non-empty content between doubled markers.
    pub const PATTERNS: [&'static str; 2] = [r"\*\*(.+?)\*\*", r"__(.+?)__"];
}

/// Italic span.
pub struct Emphasis;

impl Emphasis {
    pub const TAG: &'static str = "em";
    /// Content may not contain its own marker.
    pub const PATTERNS: [&'static str; 2] = [r"\*([^*]+)\*", r"_([^_]+)_"];
}
