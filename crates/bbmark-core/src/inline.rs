//! Inline rewrites for paragraph text.
//!
//! Each rule is a single left-to-right pass over the whole text producing a new string. The
//! order in [`rewrite_inline`] is part of the output format: `**` must be consumed before `*`
//! gets a chance to pair up the inner asterisks.

use crate::emit::{push_tagged, tagged};
use crate::scan::is_rule_line;

pub(crate) fn rewrite_inline(text: &str) -> String {
    let text = rewrite_rules(text);
    let text = rewrite_delimited(&text, "**", "b");
    let text = rewrite_delimited(&text, "*", "i");
    let text = rewrite_delimited(&text, "_", "i");
    let text = rewrite_delimited(&text, "~~", "strike");
    let text = rewrite_links(&text);
    let text = rewrite_quotes(&text);
    rewrite_code_spans(&text)
}

/// Whole-line `---` / `***` runs become `[hr][/hr]`.
pub(crate) fn rewrite_rules(text: &str) -> String {
    map_lines(text, |line| {
        if is_rule_line(line) {
            tagged("hr", "")
        } else {
            line.to_string()
        }
    })
}

/// `> text` lines become `[quote]text[/quote]`. Consecutive quote lines stay separate tags.
pub(crate) fn rewrite_quotes(text: &str) -> String {
    map_lines(text, |line| match line.strip_prefix("> ") {
        Some(rest) => tagged("quote", rest),
        None => line.to_string(),
    })
}

fn map_lines(text: &str, mut rewrite: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&rewrite(line));
    }
    out
}

/// Wraps the shortest `delim … delim` runs in `[tag]`.
///
/// The content must hold at least one character and may not cross a line break. When an
/// opening delimiter finds no partner, scanning resumes one byte later.
pub(crate) fn rewrite_delimited(text: &str, delim: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;
    while let Some(found) = text[pos..].find(delim) {
        let open = pos + found;
        let body = open + delim.len();
        match closing_delimiter(text, body, delim) {
            Some(close) => {
                out.push_str(&text[copied..open]);
                push_tagged(&mut out, tag, &text[body..close]);
                copied = close + delim.len();
                pos = copied;
            }
            // Delimiters are ASCII, so one byte on is still a char boundary.
            None => pos = open + 1,
        }
    }
    out.push_str(&text[copied..]);
    out
}

fn closing_delimiter(text: &str, body: usize, delim: &str) -> Option<usize> {
    let line_end = text[body..]
        .find('\n')
        .map_or(text.len(), |offset| body + offset);
    let first = text[body..line_end].chars().next()?;
    let from = body + first.len_utf8();
    text[from..line_end]
        .find(delim)
        .map(|offset| from + offset)
}

/// `[label](http://…)` and `[label](https://…)` become `[url=…]label[/url]`.
pub(crate) fn rewrite_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;
    while let Some(found) = text[pos..].find('[') {
        let open = pos + found;
        match parse_link(text, open) {
            Some(link) => {
                out.push_str(&text[copied..open]);
                out.push_str("[url=");
                out.push_str(link.url);
                out.push(']');
                out.push_str(link.label);
                out.push_str("[/url]");
                copied = link.end;
                pos = link.end;
            }
            None => pos = open + 1,
        }
    }
    out.push_str(&text[copied..]);
    out
}

struct Link<'a> {
    label: &'a str,
    url: &'a str,
    end: usize,
}

fn parse_link(text: &str, open: usize) -> Option<Link<'_>> {
    let label_start = open + 1;
    let label_len = text[label_start..].find(']')?;
    if label_len == 0 {
        return None;
    }
    let url_start = label_start + label_len + 2;
    if text.get(label_start + label_len + 1..url_start) != Some("(") {
        return None;
    }
    let target = &text[url_start..];
    let scheme_len = ["https://", "http://"]
        .iter()
        .find(|scheme| target.starts_with(*scheme))?
        .len();
    let url_len = target.find(')')?;
    if url_len <= scheme_len {
        return None;
    }
    Some(Link {
        label: &text[label_start..label_start + label_len],
        url: &target[..url_len],
        end: url_start + url_len + 1,
    })
}

/// `` `code` `` becomes `[code]code[/code]`. The span may cross line breaks but not another
/// backtick, and must not be empty.
pub(crate) fn rewrite_code_spans(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;
    while let Some(found) = text[pos..].find('`') {
        let open = pos + found;
        let body = open + 1;
        let Some(len) = text[body..].find('`') else {
            break;
        };
        if len == 0 {
            pos = body;
            continue;
        }
        out.push_str(&text[copied..open]);
        push_tagged(&mut out, "code", &text[body..body + len]);
        copied = body + len + 1;
        pos = copied;
    }
    out.push_str(&text[copied..]);
    out
}
