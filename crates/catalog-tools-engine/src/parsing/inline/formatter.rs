use std::sync::OnceLock;

use regex::Regex;

use super::kinds::{Emphasis, Strong};

/// One rewrite pass: every match of `pattern` becomes `<tag>$1</tag>`.
struct InlineRule {
    pattern: Regex,
    replacement: String,
}

impl InlineRule {
    fn new(pattern: &str, tag: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid inline regex"),
            replacement: format!("<{tag}>${{1}}</{tag}>"),
        }
    }
}

/// Rewrite passes in the order they must run.
///
/// Both bold passes come before both italic passes, otherwise the italic
/// pass would turn `**x**` into `*<em>x</em>*`.
fn rules() -> &'static [InlineRule] {
    static RULES: OnceLock<Vec<InlineRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let strong = Strong::PATTERNS
            .iter()
            .map(|p| InlineRule::new(p, Strong::TAG));
        let emphasis = Emphasis::PATTERNS
            .iter()
            .map(|p| InlineRule::new(p, Emphasis::TAG));
        strong.chain(emphasis).collect()
    })
}

/// Rewrites `**bold**`, `__bold__`, `*italic*` and `_italic_` into HTML tags.
///
/// Each pass sees the output of the previous one. There is no escape
/// mechanism; the rewritten tags never contain `*` or `_`, so running the
/// formatter again over its own output changes nothing.
pub fn format_inline(text: &str) -> String {
    rules().iter().fold(text.to_string(), |acc, rule| {
        rule.pattern
            .replace_all(&acc, rule.replacement.as_str())
            .into_owned()
    })
}
