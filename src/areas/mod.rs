//! Named-area rasterizer.
//!
//! Paints item names onto a `rows x columns` matrix in item order, so later
//! items win where spans overlap, and serializes the matrix into a
//! `grid-template-areas` value. Spans reaching outside the grid are clipped
//! to it; nothing here fails.

use std::ops::Range;

use crate::model::GridConfiguration;

/// Token for cells no item covers.
pub const PLACEHOLDER: &str = ".";

/// Separator between quoted rows in the multi-line property value.
pub const ROW_SEPARATOR: &str = "\n    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaMatrix<'a> {
    columns: usize,
    cells: Vec<&'a str>,
}

impl<'a> AreaMatrix<'a> {
    pub fn rasterize(config: &'a GridConfiguration) -> Self {
        let columns = config.columns as usize;
        let rows = config.rows as usize;
        let mut cells = vec![PLACEHOLDER; columns * rows];

        for item in &config.items {
            let name = item.display_name();
            for row in clip(item.start_row, item.end_row, rows) {
                for col in clip(item.start_col, item.end_col, columns) {
                    cells[row * columns + col] = name;
                }
            }
        }

        Self { columns, cells }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.cells.len().checked_div(self.columns).unwrap_or(0)
    }

    /// Name painted at the 1-based `(col, row)`, if the cell is on the grid.
    pub fn get(&self, col: i32, row: i32) -> Option<&'a str> {
        let col = usize::try_from(col.checked_sub(1)?).ok()?;
        let row = usize::try_from(row.checked_sub(1)?).ok()?;
        if col >= self.columns || row >= self.rows() {
            return None;
        }
        self.cells.get(row * self.columns + col).copied()
    }

    /// Quoted rows, e.g. `"header header ."`, top to bottom.
    pub fn quoted_rows(&self) -> Vec<String> {
        if self.columns == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.columns)
            .map(|row| format!("\"{}\"", row.join(" ")))
            .collect()
    }

    /// Multi-line value used inside a stylesheet block.
    pub fn to_template(&self) -> String {
        self.quoted_rows().join(ROW_SEPARATOR)
    }

    /// Single-line value used for inline preview styles.
    pub fn to_inline(&self) -> String {
        self.quoted_rows().join(" ")
    }
}

/// Zero-based indices of the 1-based half-open line range `[start, end)` that
/// fall inside `0..count`.
fn clip(start: i32, end: i32, count: usize) -> Range<usize> {
    let lower = usize::try_from(start.saturating_sub(1)).unwrap_or(0);
    let upper = usize::try_from(end.saturating_sub(1)).unwrap_or(0).min(count);
    lower.min(upper)..upper
}

/// `grid-template-areas` value for `config`.
pub fn template_areas(config: &GridConfiguration) -> String {
    AreaMatrix::rasterize(config).to_template()
}
