use crate::scan::{FENCE, is_rule_line};
use crate::span::Span;

/// A maximal run of non-empty source lines, borrowed from the document.
///
/// `text` never includes the newline that terminates its last line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub span: Span,
}

#[derive(Clone, Copy, Debug)]
struct Line<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (idx, byte) in source.bytes().enumerate() {
        if byte == b'\n' {
            lines.push(Line {
                text: &source[start..idx],
                start,
                end: idx,
            });
            start = idx + 1;
        }
    }
    lines.push(Line {
        text: &source[start..],
        start,
        end: source.len(),
    });
    lines
}

/// Splits `source` into blocks.
///
/// Heading lines (`#` at column 0), rule lines, fenced code and runs of `|` rows are cut off
/// from their neighbours whether or not the author separated them with empty lines. A fence is
/// only cut at its opening and closing lines, so an empty line or a heading inside it still
/// breaks it apart. Lines holding only spaces or tabs are content, not separators.
pub fn split_blocks(source: &str) -> Vec<Block<'_>> {
    let lines = split_lines(source);
    let cuts = find_cuts(source, &lines);
    let mut splitter = Splitter {
        source,
        blocks: Vec::new(),
        pending: None,
    };

    for (line, cut) in lines.iter().zip(cuts) {
        if line.text.is_empty() {
            splitter.flush();
            continue;
        }
        if cut.before {
            splitter.flush();
        }
        splitter.push(*line);
        if cut.after {
            splitter.flush();
        }
    }

    splitter.finish()
}

/// Forced block boundaries around a line.
#[derive(Clone, Copy, Debug, Default)]
struct Cut {
    before: bool,
    after: bool,
}

fn find_cuts(source: &str, lines: &[Line<'_>]) -> Vec<Cut> {
    let mut cuts = vec![Cut::default(); lines.len()];

    for (cut, line) in cuts.iter_mut().zip(lines) {
        if line.text.starts_with('#') || is_rule_line(line.text) {
            *cut = Cut {
                before: true,
                after: true,
            };
        }
    }

    // Fences never nest: scanning resumes after the line that closed the previous one.
    let mut idx = 0;
    while idx < lines.len() {
        let line = lines[idx];
        if line.text.starts_with(FENCE)
            && let Some(end) = fence_end(source, line.start)
        {
            cuts[idx].before = true;
            while lines[idx].end < end {
                idx += 1;
            }
            cuts[idx].after = true;
        }
        idx += 1;
    }

    let mut idx = 0;
    while idx < lines.len() {
        if !lines[idx].text.starts_with('|') {
            idx += 1;
            continue;
        }
        cuts[idx].before = true;
        while idx + 1 < lines.len() && lines[idx + 1].text.starts_with('|') {
            idx += 1;
        }
        cuts[idx].after = true;
        idx += 1;
    }

    cuts
}

/// End offset of the line holding the closing delimiter of a fence opened at `open`.
///
/// The closing delimiter must end its line, and at least one character must separate it from
/// the opening one.
fn fence_end(source: &str, open: usize) -> Option<usize> {
    let mut from = open + FENCE.len();
    from += source[from..].chars().next()?.len_utf8();
    loop {
        let close = from + source[from..].find(FENCE)?;
        let end = close + FENCE.len();
        if end == source.len() || source.as_bytes()[end] == b'\n' {
            return Some(end);
        }
        from = close + 1;
    }
}

struct Splitter<'a> {
    source: &'a str,
    blocks: Vec<Block<'a>>,
    pending: Option<Span>,
}

impl<'a> Splitter<'a> {
    fn push(&mut self, line: Line<'_>) {
        match &mut self.pending {
            Some(span) => span.extend_to(line.end),
            None => self.pending = Some(Span::new(line.start, line.end)),
        }
    }

    fn flush(&mut self) {
        if let Some(span) = self.pending.take() {
            self.emit(span);
        }
    }

    fn emit(&mut self, span: Span) {
        self.blocks.push(Block {
            text: span.slice(self.source),
            span,
        });
    }

    fn finish(mut self) -> Vec<Block<'a>> {
        self.flush();
        self.blocks
    }
}
