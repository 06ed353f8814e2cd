//! Raw and logical tables.
//!
//! A [`RawTable`] is one table as the extraction backend detected it: a header
//! row followed by data rows. A [`TableSet`] is the result of merging raw
//! tables into logical tables, keyed by a dense 1-based identifier.

use std::collections::{BTreeSet, HashSet};

use crate::cell::{Cell, collapse_whitespace};

/// A table with labelled columns and typed cells.
///
/// Rows are stored positionally; every row has exactly one cell per column.
///
/// Deserialization goes through [`RawTable::new`], so ragged rows are
/// padded or truncated the same way.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "TableParts"))]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TableParts {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

#[cfg(feature = "serde")]
impl From<TableParts> for RawTable {
    fn from(parts: TableParts) -> Self {
        RawTable::new(parts.columns, parts.rows)
    }
}

impl RawTable {
    /// Build a table from column labels and rows.
    ///
    /// Rows shorter than the header are padded with [`Cell::Empty`]; cells
    /// beyond the header width are dropped. Labels are used as given.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Build a table from an extracted text grid whose first row is the header.
    ///
    /// Header labels are normalized with [`normalize_header`]; data cells are
    /// typed with [`Cell::infer`]. An empty grid yields a table with no
    /// columns and no rows.
    pub fn from_grid(grid: &[Vec<Option<String>>]) -> Self {
        let Some((header, body)) = grid.split_first() else {
            return Self::default();
        };
        let columns = normalize_header(header);
        let rows = body
            .iter()
            .map(|row| row.iter().map(|c| Cell::infer(c.as_deref())).collect())
            .collect();
        Self::new(columns, rows)
    }

    /// Column labels in extraction order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Column labels as an unordered set.
    pub fn column_set(&self) -> BTreeSet<&str> {
        self.columns.iter().map(String::as_str).collect()
    }

    /// Returns `true` when `other` has the same column labels, ignoring order.
    pub fn same_columns(&self, other: &RawTable) -> bool {
        self.column_set() == other.column_set()
    }

    /// Data rows (header excluded).
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of the column labelled `label`.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// All cells of the column labelled `label`, in row order.
    pub fn column(&self, label: &str) -> Option<Vec<&Cell>> {
        let idx = self.column_index(label)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// The cell at `row` in the column labelled `label`.
    pub fn get(&self, row: usize, label: &str) -> Option<&Cell> {
        let idx = self.column_index(label)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Append the rows of `other`, remapping its columns onto this table's
    /// column order by label. Columns of `other` that this table lacks are
    /// ignored; columns it does not provide are filled with [`Cell::Empty`].
    pub fn append_rows(&mut self, other: &RawTable) {
        let mapping: Vec<Option<usize>> = self
            .columns
            .iter()
            .map(|label| other.column_index(label))
            .collect();
        for row in &other.rows {
            let remapped = mapping
                .iter()
                .map(|src| src.map(|i| row[i].clone()).unwrap_or_default())
                .collect();
            self.rows.push(remapped);
        }
    }
}

/// Normalize a header row into unique column labels.
///
/// Whitespace runs (including the `\r` and `\n` left by wrapped header
/// cells) collapse to one space. A blank label becomes `Unnamed: <index>`.
/// A repeated label gets a `.1`, `.2`, ... suffix in order of appearance.
pub fn normalize_header(header: &[Option<String>]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut labels = Vec::with_capacity(header.len());

    for (idx, raw) in header.iter().enumerate() {
        let base = raw.as_deref().map(collapse_whitespace).unwrap_or_default();
        let base = if base.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            base
        };

        let mut label = base.clone();
        let mut suffix = 1;
        while seen.contains(&label) {
            label = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(label.clone());
        labels.push(label);
    }

    labels
}

/// Logical tables keyed by a dense, 1-based identifier.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSet {
    tables: Vec<RawTable>,
}

impl TableSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `table` under the next identifier and return that identifier.
    pub fn push(&mut self, table: RawTable) -> usize {
        self.tables.push(table);
        self.tables.len()
    }

    /// The table stored under `id` (1-based).
    pub fn get(&self, id: usize) -> Option<&RawTable> {
        id.checked_sub(1).and_then(|i| self.tables.get(i))
    }

    /// Mutable access to the table stored under `id` (1-based).
    pub fn get_mut(&mut self, id: usize) -> Option<&mut RawTable> {
        id.checked_sub(1).and_then(|i| self.tables.get_mut(i))
    }

    /// The first logical table, i.e. identifier 1.
    pub fn first(&self) -> Option<&RawTable> {
        self.tables.first()
    }

    /// Number of logical tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no table has been stored.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterate `(id, table)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RawTable)> {
        self.tables.iter().enumerate().map(|(i, t)| (i + 1, t))
    }

    /// Display label of an identifier, e.g. `table_1`.
    pub fn label(id: usize) -> String {
        format!("table_{id}")
    }
}
