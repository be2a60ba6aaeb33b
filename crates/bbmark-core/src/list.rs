//! List blocks.
//!
//! Nesting is never stored as a tree. Items are parsed into a flat sequence with their raw
//! indentation, split into runs of one list type, normalized so each level is exactly
//! [`INDENT_STEP`] deeper than its parent, and rendered through a [`ListStack`] that opens and
//! closes tags as the indentation moves.

use crate::emit::TagWriter;
use crate::scan::{indent_len, list_marker};

/// Width of one nesting level, both after normalization and in the output.
pub const INDENT_STEP: usize = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListType {
    Ordered,
    Unordered,
}

impl ListType {
    pub fn tag(self) -> &'static str {
        match self {
            ListType::Ordered => "olist",
            ListType::Unordered => "list",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListItem {
    pub indent: usize,
    pub list_type: ListType,
    pub text: String,
}

impl ListItem {
    fn new(indent: usize, list_type: ListType, text: &str) -> Self {
        Self {
            indent,
            list_type,
            text: text.to_string(),
        }
    }
}

pub(crate) fn convert_list(text: &str) -> String {
    let runs: Vec<String> = split_runs(parse_items(text))
        .into_iter()
        .map(|mut run| {
            normalize_indent(&mut run);
            render_run(&run)
        })
        .collect();
    let mut out = runs.join("\n\n");
    out.push('\n');
    out.trim().to_string()
}

enum ListLine<'a> {
    Item(ListItem),
    /// `indent` and `rest` describe the line read as an item whose marker is whitespace: the
    /// indentation before that marker and the text after its space.
    Continuation {
        indent: usize,
        rest: &'a str,
        text: &'a str,
    },
    Other,
}

fn parse_line(line: &str) -> ListLine<'_> {
    let indent = indent_len(line);
    let rest = &line[indent..];
    if rest.is_empty() {
        return ListLine::Other;
    }

    if let Some(marker) = list_marker(rest)
        && let Some(text) = rest[marker.len..].strip_prefix(' ')
        && !text.is_empty()
    {
        let list_type = if marker.ordered {
            ListType::Ordered
        } else {
            ListType::Unordered
        };
        return ListLine::Item(ListItem::new(indent, list_type, text));
    }

    // Continuation lines carry no marker: their indentation has to hold a space after at
    // least one other whitespace character, standing in for "marker + space". The last such
    // space is the one taken.
    if let Some(space) = line.as_bytes()[1..indent.max(1)]
        .iter()
        .rposition(|byte| *byte == b' ')
    {
        return ListLine::Continuation {
            indent: space,
            rest: &line[space + 2..],
            text: line.trim(),
        };
    }

    ListLine::Other
}

/// Parses list lines into a flat item sequence.
///
/// Continuation lines are appended to the previous item with one space; a continuation with no
/// item before it starts an unordered item. Lines matching neither shape are dropped.
pub fn parse_items(text: &str) -> Vec<ListItem> {
    let mut items: Vec<ListItem> = Vec::new();
    for line in text.split('\n') {
        match parse_line(line) {
            ListLine::Item(item) => items.push(item),
            ListLine::Continuation { indent, rest, text } => match items.last_mut() {
                Some(last) => {
                    last.text.push(' ');
                    last.text.push_str(text);
                }
                None => items.push(ListItem::new(indent, ListType::Unordered, rest)),
            },
            ListLine::Other => {}
        }
    }
    items
}

/// Splits items into maximal runs sharing one list type.
pub fn split_runs(items: Vec<ListItem>) -> Vec<Vec<ListItem>> {
    let mut runs: Vec<Vec<ListItem>> = Vec::new();
    for item in items {
        match runs.last_mut() {
            Some(run) if run[0].list_type == item.list_type => run.push(item),
            _ => runs.push(vec![item]),
        }
    }
    runs
}

/// Clamps every indentation increase to exactly one [`INDENT_STEP`] past the previous item.
///
/// The comparison is raw against the previous *normalized* value: anything at or below it passes
/// through unchanged, so depth grows by at most one level per item. Two siblings both indented
/// past one step (`0, 4, 4`) therefore nest (`0, 2, 4`).
pub fn normalize_indent(items: &mut [ListItem]) {
    let mut previous = 0;
    for item in items {
        if item.indent > previous {
            item.indent = previous + INDENT_STEP;
        }
        previous = item.indent;
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Level {
    indent: usize,
    tag: &'static str,
}

/// Open nesting levels of the run being rendered, innermost last.
#[derive(Debug, Default)]
pub(crate) struct ListStack {
    levels: Vec<Level>,
}

impl ListStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether an item at `indent` needs a new level before it is written.
    fn opens_level(&self, indent: usize) -> bool {
        self.levels.last().is_none_or(|top| indent > top.indent)
    }

    fn open(&mut self, writer: &mut TagWriter, indent: usize, tag: &'static str) {
        writer.line_at(indent, &format!("[{}]", tag));
        self.levels.push(Level { indent, tag });
    }

    /// Closes the innermost level because a shallower item follows. The tag sits two columns
    /// past the level it returns to, or at column 2 when none is left.
    fn close(&mut self, writer: &mut TagWriter) {
        let Some(level) = self.levels.pop() else {
            return;
        };
        let column = INDENT_STEP + self.levels.last().map_or(0, |parent| parent.indent);
        writer.line_at(column, &format!("[/{}]", level.tag));
    }

    fn close_deeper_than(&mut self, writer: &mut TagWriter, indent: usize) {
        while self.levels.last().is_some_and(|top| top.indent > indent) {
            self.close(writer);
        }
    }

    /// Closes every level at the end of a run. Each tag lines up with the opening tag of the
    /// level it returns to (rounded down to a whole step); the outermost one sits at column 0.
    fn close_all(&mut self, writer: &mut TagWriter) {
        while let Some(level) = self.levels.pop() {
            let column = self.levels.last().map_or(0, |parent| {
                parent.indent / INDENT_STEP * INDENT_STEP
            });
            writer.line_at(column, &format!("[/{}]", level.tag));
        }
    }
}

/// Renders one same-type run whose indentation is already normalized.
pub fn render_run(items: &[ListItem]) -> String {
    let mut writer = TagWriter::new();
    let mut stack = ListStack::new();
    for item in items {
        let tag = item.list_type.tag();
        if stack.opens_level(item.indent) {
            stack.open(&mut writer, item.indent, tag);
        } else {
            stack.close_deeper_than(&mut writer, item.indent);
        }
        writer.line_at(item.indent + INDENT_STEP, &format!("[*] {}", item.text));
    }
    stack.close_all(&mut writer);
    writer.finish()
}
