mod block;
mod code;
mod convert;
mod dispatch;
mod emit;
mod heading;
mod inline;
mod list;
mod paragraph;
mod samples;
mod scan;
mod source_map;
mod span;
mod table;

pub use block::{Block, split_blocks};
pub use convert::{BLOCK_SEPARATOR, Conversion, ConvertedBlock, convert, convert_blocks};
pub use dispatch::{BlockKind, classify};
pub use list::{
    INDENT_STEP, ListItem, ListType, normalize_indent, parse_items, render_run, split_runs,
};
pub use samples::{Sample, samples};
pub use source_map::{Position, Range, SourceMap};
pub use span::Span;
