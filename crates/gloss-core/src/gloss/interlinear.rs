//! Column alignment for interlinear output.

use unicode_width::UnicodeWidthStr;

/// Pad the whitespace-separated columns of `rows` to a shared display
/// width so that the n-th word of every row starts at the same column.
///
/// Rows may have different column counts; missing cells count as empty.
/// Trailing padding is trimmed.
pub fn align<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    let cells: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.as_ref().split_whitespace().collect())
        .collect();

    let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    cells
        .iter()
        .map(|row| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push_str(cell);
                let pad = widths[i] - cell.width();
                line.push_str(&" ".repeat(pad));
            }
            line.truncate(line.trim_end().len());
            line
        })
        .collect()
}
