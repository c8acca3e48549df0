use std::sync::OnceLock;

use regex::Regex;

/// Which kind of list a marker opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `*` or `•` followed by whitespace. Rendered as `<ul>`.
    Bullet,
    /// Digits followed by `.` or `)` and whitespace. Rendered as `<ol>`.
    Numbered,
}

/// A list marker found at the start of a line, with the item text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub kind: ListKind,
    pub text: &'a str,
}

/// List block type with owned marker patterns.
pub struct List;

impl List {
    fn bullet_regex() -> &'static Regex {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        BULLET_REGEX.get_or_init(|| Regex::new(r"^[-*•]\s+").expect("Invalid bullet regex"))
    }

    fn numbered_regex() -> &'static Regex {
        static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
        NUMBERED_REGEX.get_or_init(|| Regex::new(r"^\d+[.)]\s+").expect("Invalid numbered regex"))
    }

    /// Detects a list marker on an already trimmed line.
    ///
    /// Bullet markers are checked first; the two patterns cannot both match.
    pub fn detect(line: &str) -> Option<ListItem<'_>> {
        if let Some(m) = Self::bullet_regex().find(line) {
            return Some(ListItem {
                kind: ListKind::Bullet,
                text: &line[m.end()..],
            });
        }
        if let Some(m) = Self::numbered_regex().find(line) {
            return Some(ListItem {
                kind: ListKind::Numbered,
                text: &line[m.end()..],
            });
        }
        None
    }
}
