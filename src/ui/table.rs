//! Box-drawn tables for workspace listings.

use console::measure_text_width;

/// A box-drawn table whose columns size to their widest cell.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            widths,
        }
    }

    /// Append a row. Cells beyond the header count are dropped.
    pub fn add_row<I, S>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
        row.truncate(self.widths.len());

        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }

        self.rows.push(row);
        self
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string without a trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.border('┌', '┬', '┐'));
        lines.push(self.line(&self.headers));
        lines.push(self.border('├', '┼', '┤'));
        lines.extend(self.rows.iter().map(|row| self.line(row)));
        lines.push(self.border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let mid = mid.to_string();
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid.as_str()))
    }

    fn line(&self, row: &[String]) -> String {
        let mut s = String::from("│");
        for (i, width) in self.widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(measure_text_width(cell));
            s.push(' ');
            s.push_str(cell);
            s.push_str(&" ".repeat(pad));
            s.push_str(" │");
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_still_renders_headers() {
        let table = Table::new(["Key", "Name"]);
        assert!(table.is_empty());
        let output = table.render();
        assert!(output.contains("Key"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn columns_widen_to_fit() {
        let mut table = Table::new(["Key"]);
        table.add_row(["amazon-elastic-compute-cloud"]);
        let output = table.render();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[1], format!("│ Key{} │", " ".repeat(25)));
        assert_eq!(lines[3], "│ amazon-elastic-compute-cloud │");
    }

    #[test]
    fn short_rows_are_padded_and_long_rows_truncated() {
        let mut table = Table::new(["A", "B"]);
        table.add_row(["only"]);
        table.add_row(["x", "y", "dropped"]);
        let output = table.render();
        assert!(output.contains("│ only │   │"));
        assert!(!output.contains("dropped"));
    }

    #[test]
    fn non_ascii_cells_align() {
        let mut table = Table::new(["Status"]);
        table.add_row(["✓ ok"]);
        let output = table.render();
        let widths: Vec<usize> = output.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn uses_box_drawing() {
        let mut table = Table::new(["Col1", "Col2"]);
        table.add_row(["a", "b"]).add_row(["c", "d"]);
        assert_eq!(table.row_count(), 2);

        let output = table.render();
        for glyph in ["┌", "┬", "┐", "├", "┼", "┤", "└", "┴", "┘"] {
            assert!(output.contains(glyph), "missing {glyph}");
        }
        assert_eq!(output.lines().count(), 6);
    }
}
