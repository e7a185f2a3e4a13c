//! Aligned item tables for the catalog listing and the receipt.

pub mod receipt;

pub use receipt::{Receipt, ReportRow};

use crate::currency::{CurrencyFormat, Money};

const NAME_HEADER: &str = "Item";
const PRICE_HEADER: &str = "Price";
const INDEX_HEADER: &str = "#";
const INDEX_WIDTH: usize = 3;
const PRICE_MIN_WIDTH: usize = 6;
const COLUMN_GAP: &str = "    ";
const SUM_LABEL: &str = "Sum: ";

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, min_width: usize, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width,
            alignment,
        }
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Computes the content widths for each column from headers, rows and
    /// the column minimums.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                width
            })
            .collect()
    }

    pub fn render_header(&self, widths: &[usize]) -> String {
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.render_row(&header, widths)
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered_cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell_text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(cell_text, widths[idx], column.alignment)
            })
            .collect();

        rendered_cells.join(COLUMN_GAP).trim_end().to_string()
    }
}

/// Counts printable characters, skipping ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for code in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&code) {
                    break;
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

/// Pads `text` to `width` according to `alignment`. Text wider than the
/// column is left intact.
pub fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let remaining = width.saturating_sub(visible_width(text));
    match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(remaining)),
        Alignment::Right => format!("{}{text}", " ".repeat(remaining)),
    }
}

/// Builds a divider exactly `width` characters long.
pub fn horizontal_rule(width: usize, plain_mode: bool) -> String {
    let ch = if plain_mode { '-' } else { '─' };
    ch.to_string().repeat(width)
}

/// Presentation settings shared by every table in a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportStyle {
    pub currency: CurrencyFormat,
    pub plain_mode: bool,
}

/// Formats `rows` as an aligned table.
///
/// Without `show_sum` a numbered `#` column leads each row, counting from 1
/// in iteration order. With `show_sum` the numbering is omitted and a total
/// line, aligned to the header's right edge, closes the table.
pub fn render_listing(rows: &[(String, Money)], show_sum: bool, style: &ReportStyle) -> String {
    let mut columns = Vec::with_capacity(3);
    if !show_sum {
        columns.push(TableColumn::new(INDEX_HEADER, INDEX_WIDTH, Alignment::Left));
    }
    columns.push(TableColumn::new(NAME_HEADER, 0, Alignment::Left));
    columns.push(TableColumn::new(PRICE_HEADER, PRICE_MIN_WIDTH, Alignment::Right));

    let table = Table {
        columns,
        rows: rows
            .iter()
            .enumerate()
            .map(|(idx, (name, price))| {
                let mut cells = Vec::with_capacity(3);
                if !show_sum {
                    cells.push((idx + 1).to_string());
                }
                cells.push(name.clone());
                cells.push(style.currency.format(*price));
                cells
            })
            .collect(),
    };

    let widths = table.compute_widths();
    let header = table.render_header(&widths);
    let header_width = visible_width(&header);
    let rule = horizontal_rule(header_width, style.plain_mode);

    let mut lines = vec![String::new(), header, rule.clone(), String::new()];
    lines.extend(table.rows.iter().map(|row| table.render_row(row, &widths)));

    if show_sum {
        let total: Money = rows.iter().map(|(_, price)| *price).sum();
        let amount = style.currency.format(total);
        let width = header_width.saturating_sub(SUM_LABEL.len());
        lines.push(String::new());
        lines.push(rule);
        lines.push(format!("{SUM_LABEL}{amount:>width$}"));
    }

    lines.push(String::new());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
