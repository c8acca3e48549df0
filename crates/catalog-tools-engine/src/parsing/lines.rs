/// Returns an iterator over the trimmed lines of `text`.
///
/// The whole input is trimmed first, then split on `\n`, then each line is
/// trimmed again. Interior blank lines are kept so the block builder can see
/// paragraph and list boundaries. A trailing `\r` goes with the per-line trim.
pub fn trimmed_lines(text: &str) -> impl Iterator<Item = &str> {
    text.trim().split('\n').map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(input: &str) -> Vec<&str> {
        trimmed_lines(input).collect()
    }

    #[test]
    fn trims_outer_and_each_line() {
        assert_eq!(texts("\n\n  a \r\n\t b\n\n"), vec!["a", "b"]);
    }

    #[test]
    fn keeps_interior_blank_lines() {
        assert_eq!(texts("a\n   \nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_input_is_one_blank_line() {
        assert_eq!(texts(""), vec![""]);
    }
}
