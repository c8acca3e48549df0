use std::collections::BTreeSet;

/// Normalizes a product identifier (EAN/SKU) read from a spreadsheet cell.
///
/// - surrounding whitespace is trimmed and interior spaces removed;
/// - blank cells give `None`;
/// - digit strings, with or without a decimal part (`0590`, `0590.0`), keep
///   their integer digits verbatim, so leading zeros survive either way;
/// - other values that read as a finite number (`5.90123456789E12`, `-0.5`)
///   are truncated to their integer form;
/// - anything else is returned unchanged.
pub fn normalize_identifier(raw: &str) -> Option<String> {
    let compact: String = raw.trim().chars().filter(|c| *c != ' ').collect();
    if compact.is_empty() {
        return None;
    }
    let (int_part, frac_part) = compact.split_once('.').unwrap_or((compact.as_str(), ""));
    if is_digits(int_part) && (frac_part.is_empty() || is_digits(frac_part)) {
        return Some(int_part.to_string());
    }
    match compact.parse::<f64>() {
        Ok(v) if v.is_finite() => {
            // `+ 0.0` turns -0 into 0
            Some(format!("{:.0}", v.trunc() + 0.0))
        }
        _ => Some(compact),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A set of identifiers a batch is restricted to.
///
/// An empty filter means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EanFilter {
    codes: BTreeSet<String>,
}

impl EanFilter {
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Whether a row with this identifier should be processed.
    pub fn admits(&self, code: &str) -> bool {
        self.is_empty() || self.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Codes of this filter that are not in `found`, sorted.
    pub fn missing_from(&self, found: &BTreeSet<String>) -> BTreeSet<String> {
        self.codes.difference(found).cloned().collect()
    }
}

impl FromIterator<String> for EanFilter {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Parses a pasted list of codes, one per line. Blank lines are skipped and
/// duplicates collapse.
pub fn parse_ean_list(text: &str) -> EanFilter {
    text.lines().filter_map(normalize_identifier).collect()
}
