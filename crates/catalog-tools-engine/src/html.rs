use crate::{options::ConversionOptions, parsing::blocks::Block};

/// Class set on the optional wrapper `<div>`.
pub const WRAPPER_CLASS: &str = "product-description";
/// Separator placed between rendered blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";
/// Indentation of each `<li>` inside its list.
pub const ITEM_INDENT: &str = "  ";

/// Renders a block sequence to the final markup string.
///
/// Text fragments are inserted verbatim: inline formatting has already been
/// applied and no escaping is done.
pub struct HtmlAssembler {
    options: ConversionOptions,
}

impl HtmlAssembler {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    pub fn assemble(&self, blocks: &[Block]) -> String {
        let html = blocks
            .iter()
            .map(|b| self.render_block(b))
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR);

        if self.options.wrap_in_div {
            format!("<div class=\"{WRAPPER_CLASS}\">\n{html}\n</div>")
        } else {
            html
        }
    }

    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
            Block::BulletList { items } => render_list("ul", items),
            Block::NumberedList { items } => render_list("ol", items),
            Block::Paragraph { text } => format!("<p>{text}</p>"),
            Block::RawParagraph { text } => text.clone(),
        }
    }
}

fn render_list(tag: &str, items: &[String]) -> String {
    let body = items
        .iter()
        .map(|item| format!("{ITEM_INDENT}<li>{item}</li>"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<{tag}>\n{body}\n</{tag}>")
}
