use crate::emit::{TagWriter, tagged};

/// Renders pipe rows as `[table]` with one header row of `[th]` and body rows of `[td]`.
///
/// Lines without a pipe, separator rows and rows without any non-empty cell are skipped. If
/// nothing is left the block is returned as it came in.
pub(crate) fn convert_table(text: &str) -> String {
    let rows: Vec<Vec<&str>> = text
        .trim()
        .split('\n')
        .filter(|line| line.contains('|') && !is_separator_row(line))
        .map(split_cells)
        .filter(|cells| !cells.is_empty())
        .collect();

    let Some((header, body)) = rows.split_first() else {
        return text.trim().to_string();
    };

    let mut writer = TagWriter::new();
    writer.line("[table]");
    writer.indent += 1;
    write_row(&mut writer, "th", header);
    for row in body {
        write_row(&mut writer, "td", row);
    }
    writer.indent -= 1;
    writer.line("[/table]");
    writer.finish()
}

fn write_row(writer: &mut TagWriter, cell_tag: &str, cells: &[&str]) {
    writer.line("[tr]");
    writer.indent += 1;
    for cell in cells {
        writer.line(&tagged(cell_tag, cell));
    }
    writer.indent -= 1;
    writer.line("[/tr]");
}

/// A row whose first character other than spaces and pipes is a dash.
fn is_separator_row(line: &str) -> bool {
    line.trim_start_matches([' ', '|']).starts_with('-')
}

/// Trimmed cells; the empty ones left by leading/trailing pipes (or `||`) are dropped.
fn split_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}
