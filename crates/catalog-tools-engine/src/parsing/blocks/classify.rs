use super::kinds::{Heading, HeadingMatch, List, ListItem};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context or options. The builder decides
/// which of the facts apply.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// The trimmed line text.
    pub text: &'a str,
    /// Whether the line is empty after trimming.
    pub is_blank: bool,
    /// Heading form of the line, if it has one.
    pub heading: Option<HeadingMatch<'a>>,
    /// List marker and item text, if the line starts with one.
    pub list_item: Option<ListItem<'a>>,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, text: &'a str) -> LineClass<'a> {
        let is_blank = text.is_empty();
        LineClass {
            text,
            is_blank,
            heading: if is_blank { None } else { Heading::detect(text) },
            list_item: if is_blank { None } else { List::detect(text) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::ListKind;

    fn classify(text: &str) -> LineClass<'_> {
        LineClassifier.classify(text)
    }

    #[test]
    fn blank_line_has_no_facts() {
        let c = classify("");
        assert!(c.is_blank);
        assert!(c.heading.is_none());
        assert!(c.list_item.is_none());
    }

    #[test]
    fn starred_colon_line_is_both_heading_and_bullet() {
        let c = classify("* Note:");
        assert_eq!(c.heading.map(|h| h.text), Some("* Note"));
        assert_eq!(c.list_item.map(|i| i.kind), Some(ListKind::Bullet));
    }

    #[test]
    fn dash_colon_line_is_only_a_bullet() {
        let c = classify("- Note:");
        assert!(c.heading.is_none());
        assert_eq!(c.list_item.map(|i| i.text), Some("Note:"));
    }

    #[test]
    fn plain_text_has_no_markers() {
        let c = classify("Just words.");
        assert!(!c.is_blank);
        assert!(c.heading.is_none());
        assert!(c.list_item.is_none());
    }
}
