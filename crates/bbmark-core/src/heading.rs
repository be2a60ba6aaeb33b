use crate::emit::tagged;

// Longest prefix first, so `### ` is never read as `# ` followed by text.
const LEVELS: [(&str, &str); 3] = [("### ", "h3"), ("## ", "h2"), ("# ", "h1")];

pub(crate) fn convert_heading(text: &str) -> String {
    let lines: Vec<String> = text.split('\n').map(heading_line).collect();
    lines.join("\n").trim().to_string()
}

fn heading_line(line: &str) -> String {
    LEVELS
        .iter()
        .find_map(|(prefix, tag)| line.strip_prefix(prefix).map(|title| tagged(tag, title)))
        .unwrap_or_else(|| line.to_string())
}

#[cfg(test)]
mod tests {
    use super::convert_heading;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", "[h1]Title[/h1]")]
    #[case("## Title", "[h2]Title[/h2]")]
    #[case("### Title", "[h3]Title[/h3]")]
    #[case("#### Deep", "#### Deep")]
    #[case("#hashtag", "#hashtag")]
    #[case("# **kept** raw", "[h1]**kept** raw[/h1]")]
    #[case("  # indented", "# indented")]
    fn heading_levels(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_heading(input), expected);
    }

    #[test]
    fn other_lines_pass_through() {
        assert_eq!(
            convert_heading("  # a\nplain\n## b"),
            "# a\nplain\n[h2]b[/h2]"
        );
    }
}
