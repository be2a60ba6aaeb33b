use crate::inline::rewrite_inline;
use crate::scan::list_marker;

/// Converts free-flowing text: reflow, trailing-whitespace trim, then the inline rules.
pub(crate) fn convert_paragraph(text: &str) -> String {
    let reflowed = reflow(text);
    let stripped: Vec<&str> = reflowed.split('\n').map(str::trim_end).collect();
    rewrite_inline(&stripped.join("\n")).trim().to_string()
}

/// Joins soft-wrapped lines with a single space and keeps hard breaks.
///
/// A line ends softly when its last character is not whitespace, optionally followed by one
/// space. Two or more trailing spaces (or a trailing tab) make a hard break. The next line's
/// indentation is swallowed by the join.
pub(crate) fn reflow(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut lines = text.split('\n');
    let Some(first) = lines.next() else {
        return out;
    };
    out.push_str(first);
    let mut prev = first;

    for line in lines {
        let rest = line.trim_start_matches([' ', '\t']);
        if ends_softly(prev) && continues_paragraph(rest) {
            if prev.ends_with(' ') {
                out.pop();
            }
            out.push(' ');
            out.push_str(rest);
        } else {
            out.push('\n');
            out.push_str(line);
        }
        prev = line;
    }
    out
}

fn ends_softly(line: &str) -> bool {
    let body = line.strip_suffix(' ').unwrap_or(line);
    body.chars().next_back().is_some_and(|ch| !ch.is_whitespace())
}

/// Whether an unindented line may be folded into the one before it.
fn continues_paragraph(rest: &str) -> bool {
    match rest.chars().next() {
        None => false,
        Some(ch) if ch.is_whitespace() || ch == '#' => false,
        Some(_) => !opens_list_item(rest),
    }
}

fn opens_list_item(rest: &str) -> bool {
    list_marker(rest).is_some_and(|marker| rest.as_bytes().get(marker.len) == Some(&b' '))
}

#[cfg(test)]
mod tests {
    use super::{convert_paragraph, reflow};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Line one.\nLine two.", "Line one. Line two.")]
    #[case("Line one. \nLine two.", "Line one. Line two.")]
    #[case("Line one.  \nLine two.", "Line one.  \nLine two.")]
    #[case("Line one.\t\nLine two.", "Line one.\t\nLine two.")]
    #[case("a\n    b\n\tc", "a b c")]
    #[case("a\n- b", "a\n- b")]
    #[case("a\n-b", "a -b")]
    #[case("a\n12. b", "a\n12. b")]
    #[case("a\n1.5 b", "a 1.5 b")]
    #[case("a\n  # b", "a\n  # b")]
    #[case("a\n> b", "a > b")]
    fn reflow_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(reflow(input), expected);
    }

    #[test]
    fn hard_break_keeps_lines_and_drops_trailing_spaces() {
        assert_eq!(
            convert_paragraph("Line one.  \nLine two."),
            "Line one.\nLine two."
        );
    }

    #[test]
    fn quote_lines_after_a_hard_break_get_separate_tags() {
        assert_eq!(
            convert_paragraph("> q1  \n> q2"),
            "[quote]q1[/quote]\n[quote]q2[/quote]"
        );
    }

    #[test]
    fn soft_wrapped_quote_lines_fold_into_one_quote() {
        assert_eq!(convert_paragraph("> q1\n> q2"), "[quote]q1 > q2[/quote]");
    }

    #[test]
    fn result_is_trimmed() {
        assert_eq!(convert_paragraph("  padded  "), "padded");
    }
}
