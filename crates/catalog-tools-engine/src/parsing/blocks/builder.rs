use crate::options::ConversionOptions;

use super::{
    classify::LineClass,
    kinds::{ListKind, Paragraph},
    types::Block,
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    List { kind: ListKind, items: Vec<String> },
}

/// Phase 2 of block parsing: a forward-only state machine over [`LineClass`]es.
///
/// Precedence per line:
/// 1. an open list run of the same kind takes the line as another item;
/// 2. blank lines close whatever is open and are otherwise skipped;
/// 3. headings (when enabled) are single-line blocks;
/// 4. list markers (when enabled) open a new run;
/// 5. anything else extends the current paragraph.
pub struct BlockBuilder {
    options: ConversionOptions,
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            options,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.try_extend_list(c) {
            return;
        }
        self.flush_list();

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if self.options.convert_headings
            && let Some(h) = c.heading
        {
            self.flush_paragraph();
            self.out.push(Block::Heading {
                level: h.level,
                text: h.text.to_string(),
            });
            return;
        }

        if self.options.convert_lists
            && let Some(item) = c.list_item
        {
            self.flush_paragraph();
            self.leaf = LeafState::List {
                kind: item.kind,
                items: vec![item.text.to_string()],
            };
            return;
        }

        self.extend_paragraph(c.text);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.flush_paragraph();
        self.out
    }

    fn try_extend_list(&mut self, c: &LineClass<'_>) -> bool {
        let LeafState::List { kind, items } = &mut self.leaf else {
            return false;
        };
        match c.list_item {
            Some(item) if item.kind == *kind => {
                items.push(item.text.to_string());
                true
            }
            _ => false,
        }
    }

    fn extend_paragraph(&mut self, text: &str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(text.to_string()),
            _ => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![text.to_string()],
                }
            }
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph { lines } = prev {
            let text = lines.join(Paragraph::LINE_JOIN);
            self.out.push(if self.options.add_paragraphs {
                Block::Paragraph { text }
            } else {
                Block::RawParagraph { text }
            });
        } else {
            self.leaf = prev; // put back non-paragraph leaf
        }
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::List { kind, items } = prev {
            self.out.push(Block::list(kind, items));
        } else {
            self.leaf = prev;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::classify::LineClassifier, lines::trimmed_lines};
    use pretty_assertions::assert_eq;

    fn build(text: &str, options: ConversionOptions) -> Vec<Block> {
        let mut builder = BlockBuilder::new(options);
        for line in trimmed_lines(text) {
            builder.push(&LineClassifier.classify(line));
        }
        builder.finish()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn paragraph_stops_at_list_start() {
        let blocks = build("Intro\nmore\n- a\n- b", ConversionOptions::default());
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    text: "Intro more".into()
                },
                Block::BulletList {
                    items: strings(&["a", "b"])
                },
            ]
        );
    }

    #[test]
    fn paragraph_stops_at_heading() {
        let blocks = build("Intro\nDetails:\nBody", ConversionOptions::default());
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    text: "Intro".into()
                },
                Block::Heading {
                    level: 3,
                    text: "Details".into()
                },
                Block::Paragraph {
                    text: "Body".into()
                },
            ]
        );
    }

    #[test]
    fn bullet_run_keeps_colon_items_as_items() {
        let blocks = build("- a\n* Note:\n- c", ConversionOptions::default());
        assert_eq!(
            blocks,
            vec![Block::BulletList {
                items: strings(&["a", "Note:", "c"])
            }]
        );
    }

    #[test]
    fn starred_colon_line_opening_a_block_is_a_heading() {
        let blocks = build("* Note:\n- a", ConversionOptions::default());
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 3,
                    text: "* Note".into()
                },
                Block::BulletList {
                    items: strings(&["a"])
                },
            ]
        );
    }

    #[test]
    fn switching_marker_kind_starts_a_new_list() {
        let blocks = build("- a\n1. b\n2. c\n- d", ConversionOptions::default());
        assert_eq!(
            blocks,
            vec![
                Block::BulletList {
                    items: strings(&["a"])
                },
                Block::NumberedList {
                    items: strings(&["b", "c"])
                },
                Block::BulletList {
                    items: strings(&["d"])
                },
            ]
        );
    }

    #[test]
    fn blank_line_splits_a_list() {
        let blocks = build("- a\n\n- b", ConversionOptions::default());
        assert_eq!(
            blocks,
            vec![
                Block::BulletList {
                    items: strings(&["a"])
                },
                Block::BulletList {
                    items: strings(&["b"])
                },
            ]
        );
    }

    #[test]
    fn text_after_list_opens_paragraph() {
        let blocks = build("- a\nafter", ConversionOptions::default());
        assert_eq!(
            blocks,
            vec![
                Block::BulletList {
                    items: strings(&["a"])
                },
                Block::Paragraph {
                    text: "after".into()
                },
            ]
        );
    }

    #[test]
    fn disabled_lists_fold_into_paragraph() {
        let options = ConversionOptions {
            convert_lists: false,
            ..ConversionOptions::default()
        };
        assert_eq!(
            build("- a\n- b", options),
            vec![Block::Paragraph {
                text: "- a - b".into()
            }]
        );
    }

    #[test]
    fn disabled_headings_fold_into_paragraph() {
        let options = ConversionOptions {
            convert_headings: false,
            ..ConversionOptions::default()
        };
        assert_eq!(
            build("# Title\nSpecs:", options),
            vec![Block::Paragraph {
                text: "# Title Specs:".into()
            }]
        );
    }

    #[test]
    fn raw_paragraph_without_p_tags() {
        let options = ConversionOptions {
            add_paragraphs: false,
            ..ConversionOptions::default()
        };
        assert_eq!(
            build("one\ntwo", options),
            vec![Block::RawParagraph {
                text: "one two".into()
            }]
        );
    }

    #[test]
    fn only_blank_lines_yield_nothing() {
        assert!(build("\n  \n\t\n", ConversionOptions::default()).is_empty());
    }
}
