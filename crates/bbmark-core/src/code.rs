use crate::emit::push_tagged;
use crate::scan::find_fence;

/// Replaces every fenced span with `[code]…[/code]`, trimming the fenced content.
///
/// Text around the fences is copied verbatim; an info string after the opening delimiter is
/// part of the content.
pub(crate) fn convert_code_block(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    while let Some(fence) = find_fence(text, copied, false) {
        out.push_str(&text[copied..fence.open]);
        push_tagged(&mut out, "code", fence.interior(text).trim());
        copied = fence.end();
    }
    out.push_str(&text[copied..]);
    out.trim().to_string()
}
