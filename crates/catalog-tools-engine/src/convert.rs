use crate::{
    html::HtmlAssembler,
    options::ConversionOptions,
    parsing::{blocks::Block, format_blocks, parse_document},
};

/// Converts a plain-text product description to HTML.
///
/// Missing, empty or whitespace-only input gives `""` (no description),
/// regardless of `wrap_in_div`. Every other input maps to some markup; there
/// is no failure case, so a batch never stops on one odd description.
pub fn text_to_html(text: Option<&str>, options: &ConversionOptions) -> String {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return String::new();
    };

    let doc = parse_document(text, options);
    if log::log_enabled!(log::Level::Debug) {
        let kinds: Vec<&str> = doc.blocks.iter().map(Block::kind_name).collect();
        log::debug!(
            "classified {} lines into blocks [{}]",
            text.trim().lines().count(),
            kinds.join(", ")
        );
    }

    let blocks = format_blocks(doc.blocks, options);
    HtmlAssembler::new(*options).assemble(&blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn default_html(text: &str) -> String {
        text_to_html(Some(text), &ConversionOptions::default())
    }

    #[rstest]
    #[case("# Title", "<h1>Title</h1>")]
    #[case("Specs:", "<h3>Specs</h3>")]
    #[case("- a\n- b", "<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>")]
    #[case("1. a\n2) b", "<ol>\n  <li>a</li>\n  <li>b</li>\n</ol>")]
    #[case("Hello **world**", "<p>Hello <strong>world</strong></p>")]
    fn default_conversions(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(default_html(input), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("\n\n"))]
    #[case(Some("  \n\t\n  "))]
    fn absent_or_blank_is_empty(#[case] text: Option<&str>) {
        assert_eq!(text_to_html(text, &ConversionOptions::default()), "");
    }

    #[test]
    fn blank_input_is_empty_even_when_wrapping() {
        let options = ConversionOptions {
            wrap_in_div: true,
            ..ConversionOptions::default()
        };
        assert_eq!(text_to_html(Some("   "), &options), "");
    }

    #[test]
    fn bare_paragraph_without_p() {
        let options = ConversionOptions {
            add_paragraphs: false,
            ..ConversionOptions::default()
        };
        assert_eq!(
            text_to_html(Some("Hello **world**"), &options),
            "Hello <strong>world</strong>"
        );
    }

    #[test]
    fn wrap_in_div_wraps_exactly_once() {
        let options = ConversionOptions {
            wrap_in_div: true,
            ..ConversionOptions::default()
        };
        let html = text_to_html(Some("# T\n\nBody"), &options);
        assert_eq!(
            html,
            "<div class=\"product-description\">\n<h1>T</h1>\n\n<p>Body</p>\n</div>"
        );
        assert_eq!(html.matches("<div").count(), 1);
    }

    #[test]
    fn mixed_document() {
        assert_eq!(
            default_html("# T\n\nIntro line.\n\n- one\n- two\n\nMore text."),
            "<h1>T</h1>\n\n<p>Intro line.</p>\n\n<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>\n\n<p>More text.</p>"
        );
    }

    #[test]
    fn lists_disabled_become_paragraph() {
        let options = ConversionOptions {
            convert_lists: false,
            ..ConversionOptions::default()
        };
        assert_eq!(text_to_html(Some("- a\n- b"), &options), "<p>- a - b</p>");
    }

    #[test]
    fn crlf_input_converts_like_lf() {
        assert_eq!(
            default_html("Cechy:\r\n- one\r\n- two\r\n"),
            default_html("Cechy:\n- one\n- two\n")
        );
    }

    #[test]
    fn existing_html_passes_through() {
        assert_eq!(default_html("a <br> b & c"), "<p>a <br> b & c</p>");
    }
}
