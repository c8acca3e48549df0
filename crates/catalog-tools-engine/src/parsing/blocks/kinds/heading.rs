use std::sync::OnceLock;

use regex::Regex;

/// Heading block type with owned syntax rules.
///
/// Two forms are recognised on a trimmed line:
/// - `#`-prefixed: 1–6 `#`, whitespace, non-empty text. Level = number of `#`.
/// - colon-terminated: shorter than [`Heading::COLON_MAX_CHARS`] characters,
///   not starting with [`Heading::COLON_EXCLUDED_PREFIX`], ending in `:`.
///   Level is always [`Heading::COLON_LEVEL`].
pub struct Heading;

/// A detected heading: its level and the text without markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMatch<'a> {
    pub level: u8,
    pub text: &'a str,
}

impl Heading {
    pub const COLON: char = ':';
    pub const COLON_LEVEL: u8 = 3;
    /// Character count (not bytes) a colon heading must stay below.
    pub const COLON_MAX_CHARS: usize = 60;
    pub const COLON_EXCLUDED_PREFIX: char = '-';

    fn hash_regex() -> &'static Regex {
        static HASH_REGEX: OnceLock<Regex> = OnceLock::new();
        HASH_REGEX.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid heading regex"))
    }

    /// Detects a heading on an already trimmed line.
    pub fn detect(line: &str) -> Option<HeadingMatch<'_>> {
        if let Some(caps) = Self::hash_regex().captures(line) {
            let hashes = caps.get(1)?;
            let text = caps.get(2)?;
            return Some(HeadingMatch {
                level: hashes.as_str().len() as u8,
                text: text.as_str(),
            });
        }

        if line.ends_with(Self::COLON)
            && line.chars().count() < Self::COLON_MAX_CHARS
            && !line.starts_with(Self::COLON_EXCLUDED_PREFIX)
        {
            return Some(HeadingMatch {
                level: Self::COLON_LEVEL,
                text: &line[..line.len() - Self::COLON.len_utf8()],
            });
        }

        None
    }
}
