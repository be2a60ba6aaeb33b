use tracing::{debug, trace};

use crate::block::split_blocks;
use crate::dispatch::{BlockKind, classify, transform};
use crate::span::Span;

/// Placed between converted blocks: exactly one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConvertedBlock {
    pub kind: BlockKind,
    /// Source bytes the block was cut from.
    pub span: Span,
    pub output: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Conversion {
    pub bbcode: String,
    pub blocks: Vec<ConvertedBlock>,
}

/// Converts a Markdown document to BBCode.
///
/// Total over every input: markup that does not match a rule is passed through. The output
/// always ends with a newline, so a document without any block converts to `"\n"`.
pub fn convert(source: &str) -> String {
    convert_blocks(source).bbcode
}

/// Like [`convert`], but also reports which transform handled each block and where the block
/// came from in `source`.
pub fn convert_blocks(source: &str) -> Conversion {
    let blocks = split_blocks(source);
    debug!(blocks = blocks.len(), bytes = source.len(), "converting markdown");

    let blocks: Vec<ConvertedBlock> = blocks
        .into_iter()
        .map(|block| {
            let kind = classify(block.text);
            trace!(
                kind = kind.as_str(),
                start = block.span.start,
                end = block.span.end,
                "dispatching block"
            );
            ConvertedBlock {
                kind,
                span: block.span,
                output: transform(block.text, kind),
            }
        })
        .collect();

    let outputs: Vec<&str> = blocks.iter().map(|block| block.output.as_str()).collect();
    let mut bbcode = outputs.join(BLOCK_SEPARATOR);
    bbcode.push('\n');
    Conversion { bbcode, blocks }
}
