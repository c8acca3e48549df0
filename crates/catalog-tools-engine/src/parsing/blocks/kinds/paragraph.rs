/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback when no heading or
/// list opener matches. Consecutive lines are joined with [`Paragraph::LINE_JOIN`].
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";
}
