use crate::extract::{css, is_filler_row, row_cells, text_of};
use crate::Result;
use scraper::ElementRef;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// One cell of an extracted table
///
/// Serializes as `null`, a string, or a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// The cell was absent or empty
    #[default]
    Missing,
    Text(String),
    Number(f64),
    Url(String),
}

impl CellValue {
    /// Interprets raw cell text
    ///
    /// Empty text is `Missing`; plain numbers (thousands separators allowed)
    /// are `Number`; everything else is kept verbatim as `Text`.
    pub fn from_text(raw: &str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return Self::Missing;
        }

        let numeric = text.replace(',', "");
        let looks_numeric = numeric.chars().any(|c| c.is_ascii_digit())
            && numeric
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'));

        if looks_numeric {
            if let Ok(number) = numeric.parse::<f64>() {
                return Self::Number(number);
            }
        }

        Self::Text(text.to_string())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Text or URL content
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Url(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Text(s) | Self::Url(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A flattened table: one header level, rectangular rows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ExtractedTable {
    /// Flattens an HTML `<table>`
    ///
    /// # Rules
    ///
    /// - Columns come from the last `<thead>` row, i.e. the inner level of a
    ///   two-level header; a `colspan` repeats its label.
    /// - Rows come from `<tbody>`; repeated header rows and spacers are skipped,
    ///   `<tfoot>` totals are ignored.
    /// - Rows shorter than the header are padded with `Missing`.
    pub fn from_element(table: &ElementRef) -> Result<Self> {
        let head_rows = css("thead tr")?;
        let body_rows = css("tbody tr")?;

        let columns = match table.select(&head_rows).last() {
            Some(header) => header_labels(&header),
            None => Vec::new(),
        };

        let mut rows = Vec::new();
        for row in table.select(&body_rows) {
            if is_filler_row(&row) {
                continue;
            }

            let mut cells: Vec<CellValue> = row_cells(&row)
                .iter()
                .map(|cell| CellValue::from_text(&text_of(cell)))
                .collect();

            if cells.is_empty() {
                continue;
            }

            if !columns.is_empty() {
                if cells.len() > columns.len() {
                    tracing::warn!(
                        "Row has {} cells for {} columns; extra cells dropped",
                        cells.len(),
                        columns.len()
                    );
                }
                cells.resize(columns.len(), CellValue::Missing);
            }

            rows.push(cells);
        }

        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with this label
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` in the first column labelled `name`
    pub fn get(&self, row: usize, name: &str) -> Option<&CellValue> {
        let col = self.column_index(name)?;
        self.rows.get(row)?.get(col)
    }
}

fn header_labels(header: &ElementRef) -> Vec<String> {
    let mut labels = Vec::new();
    for cell in row_cells(header) {
        let label = text_of(&cell);
        let span = cell
            .value()
            .attr("colspan")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        labels.extend(std::iter::repeat(label).take(span));
    }
    labels
}

/// Label-to-column lookup built from a table's header row
///
/// Each header cell is registered under both its `data-stat` attribute and
/// its visible label, so fields are found by name whatever the column order.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Builds the index from one header row; the first occurrence of a key wins
    pub fn from_row(header: &ElementRef) -> Self {
        let mut positions = HashMap::new();
        let mut index = 0;

        for cell in row_cells(header) {
            if let Some(stat) = cell.value().attr("data-stat") {
                positions.entry(stat.to_string()).or_insert(index);
            }
            let label = text_of(&cell);
            if !label.is_empty() {
                positions.entry(label).or_insert(index);
            }

            index += cell
                .value()
                .attr("colspan")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(1)
                .max(1);
        }

        Self { positions }
    }

    /// Builds the index from the last `<thead>` row of a table
    pub fn from_table(table: &ElementRef) -> Result<Option<Self>> {
        let head_rows = css("thead tr")?;
        Ok(table.select(&head_rows).last().map(|row| Self::from_row(&row)))
    }

    /// Column of the first key present in the header
    pub fn position(&self, keys: &[&str]) -> Option<usize> {
        keys.iter().find_map(|key| self.positions.get(*key).copied())
    }
}
