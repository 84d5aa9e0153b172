//! Plain-text tables for list views.

/// A record that can be printed as one table row.
pub trait TableRow {
    /// Column headers, one per cell of [`TableRow::to_row`].
    const HEADERS: &'static [&'static str];

    fn to_row(&self) -> Vec<String>;
}

impl<T: TableRow> TableRow for &T {
    const HEADERS: &'static [&'static str] = T::HEADERS;

    fn to_row(&self) -> Vec<String> {
        (*self).to_row()
    }
}

/// Column separator.
const GAP: &str = "  ";

/// Renders `rows` under `T::HEADERS`, each column as wide as its widest
/// cell. Trailing whitespace is trimmed from every line.
pub fn render_table<T: TableRow>(rows: &[T]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(|row| row.to_row()).collect();
    let headers: Vec<String> = T::HEADERS.iter().map(|h| h.to_string()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(width(cell));
            }
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&headers).chain(cells.iter()) {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{cell}{}", " ".repeat(w - width(cell))))
            .collect::<Vec<_>>()
            .join(GAP);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn width(text: &str) -> usize {
    text.chars().count()
}
