/// Line-oriented BBCode writer with deterministic formatting: 2-space indentation, LF newlines.
pub(crate) struct TagWriter {
    out: String,
    pub(crate) indent: usize,
}

impl TagWriter {
    pub(crate) fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    /// Writes `line` at the current nesting depth.
    pub(crate) fn line(&mut self, line: &str) {
        self.line_at(self.indent * 2, line);
    }

    /// Writes `line` after exactly `column` spaces, ignoring the nesting depth.
    pub(crate) fn line_at(&mut self, column: usize, line: &str) {
        for _ in 0..column {
            self.out.push(' ');
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    pub(crate) fn finish(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

pub(crate) fn tagged(tag: &str, inner: &str) -> String {
    let mut out = String::with_capacity(inner.len() + tag.len() * 2 + 5);
    push_tagged(&mut out, tag, inner);
    out
}

pub(crate) fn push_tagged(out: &mut String, tag: &str, inner: &str) {
    out.push('[');
    out.push_str(tag);
    out.push(']');
    out.push_str(inner);
    out.push_str("[/");
    out.push_str(tag);
    out.push(']');
}
