use super::kinds::ListKind;

/// One classified unit of the output document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `<h{level}>`; level is 1..=6.
    Heading { level: u8, text: String },
    /// `<ul>` with one entry per item.
    BulletList { items: Vec<String> },
    /// `<ol>` with one entry per item.
    NumberedList { items: Vec<String> },
    /// Joined paragraph lines, rendered inside `<p>`.
    Paragraph { text: String },
    /// Joined paragraph lines, rendered bare (`add_paragraphs` off).
    RawParagraph { text: String },
}

impl Block {
    pub(crate) fn list(kind: ListKind, items: Vec<String>) -> Self {
        match kind {
            ListKind::Bullet => Block::BulletList { items },
            ListKind::Numbered => Block::NumberedList { items },
        }
    }

    /// Applies `f` to every text fragment in the block, keeping its shape.
    pub fn map_text(self, mut f: impl FnMut(&str) -> String) -> Self {
        match self {
            Block::Heading { level, text } => Block::Heading {
                level,
                text: f(&text),
            },
            Block::BulletList { items } => Block::BulletList {
                items: items.iter().map(|i| f(i)).collect(),
            },
            Block::NumberedList { items } => Block::NumberedList {
                items: items.iter().map(|i| f(i)).collect(),
            },
            Block::Paragraph { text } => Block::Paragraph { text: f(&text) },
            Block::RawParagraph { text } => Block::RawParagraph { text: f(&text) },
        }
    }

    /// Short name used in debug logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::BulletList { .. } => "BulletList",
            Block::NumberedList { .. } => "NumberedList",
            Block::Paragraph { .. } => "Paragraph",
            Block::RawParagraph { .. } => "RawParagraph",
        }
    }
}
