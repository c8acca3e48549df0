use serde::{Deserialize, Serialize};

/// Switches for each stage of the text → HTML conversion.
///
/// Every field gates exactly one stage. Missing fields take their default
/// when deserialized; unknown keys are rejected so a misspelled option is an
/// error instead of being silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionOptions {
    /// Wrap paragraphs in `<p>` tags.
    pub add_paragraphs: bool,
    /// Turn `-`/`*`/`•` and `1.`/`1)` runs into `<ul>`/`<ol>`.
    pub convert_lists: bool,
    /// Detect `# Heading` lines and short lines ending in `:`.
    pub convert_headings: bool,
    /// Rewrite `**bold**`, `__bold__`, `*italic*` and `_italic_`.
    pub convert_formatting: bool,
    /// Wrap the whole result in `<div class="product-description">`.
    pub wrap_in_div: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            add_paragraphs: true,
            convert_lists: true,
            convert_headings: true,
            convert_formatting: true,
            wrap_in_div: false,
        }
    }
}
