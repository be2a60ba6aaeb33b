//! Byte-level predicates shared by the splitter, the classifier and the transforms.

pub(crate) const FENCE: &str = "```";

pub(crate) fn is_space_or_tab(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Number of leading space/tab bytes.
pub(crate) fn indent_len(text: &str) -> usize {
    text.bytes().take_while(|byte| is_space_or_tab(*byte)).count()
}

/// A line made only of three or more `-`, or only of three or more `*`.
pub(crate) fn is_rule_line(text: &str) -> bool {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(&marker @ (b'-' | b'*')) => bytes.len() >= 3 && bytes.iter().all(|b| *b == marker),
        _ => false,
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ListMarker {
    pub ordered: bool,
    /// Marker length in bytes (`-` is 1, `12.` is 3).
    pub len: usize,
}

/// Recognises `-`, `+`, `*` or a digit run followed by `.` at the start of `text`.
pub(crate) fn list_marker(text: &str) -> Option<ListMarker> {
    let bytes = text.as_bytes();
    match bytes.first()? {
        b'-' | b'+' | b'*' => Some(ListMarker {
            ordered: false,
            len: 1,
        }),
        b'0'..=b'9' => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            (bytes.get(digits) == Some(&b'.')).then_some(ListMarker {
                ordered: true,
                len: digits + 1,
            })
        }
        _ => None,
    }
}

/// True when `line` opens a list item: optional indentation, a marker, then at least one
/// space or tab.
pub(crate) fn starts_list_item(line: &str) -> bool {
    let rest = &line[indent_len(line)..];
    list_marker(rest).is_some_and(|marker| {
        rest.as_bytes()
            .get(marker.len)
            .is_some_and(|byte| is_space_or_tab(*byte))
    })
}

/// A triple-backtick pair: `open` and `close` are the byte offsets of the two delimiters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Fence {
    pub open: usize,
    pub close: usize,
}

impl Fence {
    pub(crate) fn interior<'a>(&self, text: &'a str) -> &'a str {
        &text[self.open + FENCE.len()..self.close]
    }

    pub(crate) fn end(&self) -> usize {
        self.close + FENCE.len()
    }
}

/// Finds the first fenced span starting at or after `from`, closing at the nearest following
/// delimiter. With `non_empty`, at least one character must sit between the delimiters.
pub(crate) fn find_fence(text: &str, from: usize, non_empty: bool) -> Option<Fence> {
    let open = from + text.get(from..)?.find(FENCE)?;
    let mut body = open + FENCE.len();
    if non_empty {
        body += text[body..].chars().next()?.len_utf8();
    }
    let close = body + text[body..].find(FENCE)?;
    Some(Fence { open, close })
}
