pub mod blocks;
pub mod inline;
pub mod lines;

use crate::options::ConversionOptions;

use blocks::{Block, BlockBuilder, LineClassifier};
use lines::trimmed_lines;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

/// Classifies `text` into blocks in a single forward pass.
///
/// Block text is still raw here; see [`format_blocks`] for inline markup.
pub fn parse_document(text: &str, options: &ConversionOptions) -> ParsedDoc {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new(*options);

    for line in trimmed_lines(text) {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Applies inline formatting to every text fragment when `convert_formatting` is on.
pub fn format_blocks(blocks: Vec<Block>, options: &ConversionOptions) -> Vec<Block> {
    if !options.convert_formatting {
        return blocks;
    }
    blocks
        .into_iter()
        .map(|b| b.map_text(inline::format_inline))
        .collect()
}
