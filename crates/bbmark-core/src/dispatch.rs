use crate::code::convert_code_block;
use crate::heading::convert_heading;
use crate::list::convert_list;
use crate::paragraph::convert_paragraph;
use crate::scan::{find_fence, starts_list_item};
use crate::table::convert_table;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockKind {
    Heading,
    CodeBlock,
    List,
    Table,
    Paragraph,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::CodeBlock => "code",
            BlockKind::List => "list",
            BlockKind::Table => "table",
            BlockKind::Paragraph => "paragraph",
        }
    }
}

/// Picks the transform for a block from its content. The first matching rule wins.
pub fn classify(text: &str) -> BlockKind {
    let first = text.split('\n').next().unwrap_or("");
    if first.trim_start().starts_with('#') {
        BlockKind::Heading
    } else if find_fence(text, 0, true).is_some() {
        BlockKind::CodeBlock
    } else if starts_list_item(first) {
        BlockKind::List
    } else if first.starts_with('|') {
        BlockKind::Table
    } else {
        BlockKind::Paragraph
    }
}

pub(crate) fn transform(text: &str, kind: BlockKind) -> String {
    match kind {
        BlockKind::Heading => convert_heading(text),
        BlockKind::CodeBlock => convert_code_block(text),
        BlockKind::List => convert_list(text),
        BlockKind::Table => convert_table(text),
        BlockKind::Paragraph => convert_paragraph(text),
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockKind, classify};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", BlockKind::Heading)]
    #[case("   #tag", BlockKind::Heading)]
    #[case("# Title\n```a```", BlockKind::Heading)]
    #[case("```\ncode\n```", BlockKind::CodeBlock)]
    #[case("text ```x``` text", BlockKind::CodeBlock)]
    #[case("- item ```x```", BlockKind::CodeBlock)]
    #[case("``````", BlockKind::Paragraph)]
    #[case("- item", BlockKind::List)]
    #[case("  3.\tstep", BlockKind::List)]
    #[case("-item", BlockKind::Paragraph)]
    #[case("| a | b |", BlockKind::Table)]
    #[case(" | a |", BlockKind::Paragraph)]
    #[case("text\n- item", BlockKind::Paragraph)]
    #[case("---", BlockKind::Paragraph)]
    fn classification_priority(#[case] text: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(text), expected);
    }
}
