//! Sparse, dynamically sized table of text cells.

use std::collections::HashMap;
use std::io::{self, BufReader, BufWriter, Read, Write};

use tracing::{debug, trace};

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::options::Delimiters;

/// Operations shared by every table implementation, locked or not.
///
/// Coordinates are zero-based. The extents are one past the highest row and
/// column that hold a cell.
pub trait CellStore {
    /// Insert or replace the cell at `[row, column]`, growing the extents if needed.
    ///
    /// # Panics
    ///
    /// If `row` or `column` is `usize::MAX`, since the extents could not
    /// cover it. [`SparseTable::try_add`] reports this as an error instead.
    fn add(&mut self, row: usize, column: usize, content: impl Into<String>);

    /// Read a cell. Unwritten cells inside the extents read as `""`; anything
    /// outside them is [`Error::OutOfRange`].
    fn get(&self, row: usize, column: usize) -> Result<String>;

    /// Delete a cell, returning whether anything was removed.
    fn remove(&mut self, row: usize, column: usize) -> bool;

    /// Replace the whole content with the lines read from `reader`.
    fn load<R: Read>(&mut self, reader: R) -> Result<()>;

    /// Write every row in `[0, rows) x [0, columns)`, each ending with a newline.
    fn store<W: Write>(&self, writer: W) -> Result<()>;

    fn rows(&self) -> usize;

    fn columns(&self) -> usize;

    fn clear(&mut self);
}

#[derive(Debug, Default, Clone)]
struct Grid {
    cells: HashMap<usize, HashMap<usize, String>>,
    rows: usize,
    columns: usize,
}

impl Grid {
    fn add(&mut self, row: usize, column: usize, content: String) -> Result<()> {
        let (Some(rows), Some(columns)) = (row.checked_add(1), column.checked_add(1)) else {
            return Err(Error::IndexOverflow { row, column });
        };
        self.cells.entry(row).or_default().insert(column, content);
        self.rows = self.rows.max(rows);
        self.columns = self.columns.max(columns);
        Ok(())
    }

    // Line and field positions come from enumeration and stay far below usize::MAX.
    fn insert_decoded(&mut self, row: usize, column: usize, content: String) {
        let _ = self.add(row, column, content);
    }

    fn cell(&self, row: usize, column: usize) -> Result<&str> {
        if row >= self.rows || column >= self.columns {
            return Err(Error::OutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.cell_or_empty(row, column))
    }

    fn cell_or_empty(&self, row: usize, column: usize) -> &str {
        self.cells
            .get(&row)
            .and_then(|r| r.get(&column))
            .map_or("", String::as_str)
    }

    fn remove(&mut self, row: usize, column: usize) -> bool {
        let Some(row_map) = self.cells.get_mut(&row) else {
            return false;
        };
        if row_map.remove(&column).is_none() {
            return false;
        }
        if row_map.is_empty() {
            self.cells.remove(&row);
        }
        self.recalculate_extents();
        true
    }

    // Full rescan: the removed cell may have been the only one in the last row or column.
    fn recalculate_extents(&mut self) {
        let mut rows = 0;
        let mut columns = 0;
        for (&r, row_map) in &self.cells {
            rows = rows.max(r + 1);
            for &c in row_map.keys() {
                columns = columns.max(c + 1);
            }
        }
        trace!(rows, columns, "recalculated extents");
        self.rows = rows;
        self.columns = columns;
    }

    fn extend_rows(&mut self, rows: usize) {
        self.rows = self.rows.max(rows);
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.rows = 0;
        self.columns = 0;
    }
}

/// A table bound to one delimiter configuration.
///
/// ```
/// use dcsv::{CellStore, SparseTable};
///
/// let mut table = SparseTable::office();
/// table.add(0, 0, "mydata");
/// table.add(1, 1, "anotherdata");
/// assert_eq!(table.get(1, 1).unwrap(), "anotherdata");
/// table.remove(1, 1);
/// assert_eq!((table.rows(), table.columns()), (1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct SparseTable {
    grid: Grid,
    codec: Codec,
}

impl SparseTable {
    pub fn new(delims: Delimiters) -> Self {
        Self {
            grid: Grid::default(),
            codec: Codec::new(delims),
        }
    }

    pub fn office() -> Self {
        Self::new(Delimiters::office())
    }

    pub fn with_delimiters(field_separator: &str, text_delimiter: &str) -> Result<Self> {
        Ok(Self::new(Delimiters::new(field_separator, text_delimiter)?))
    }

    pub fn delimiters(&self) -> &Delimiters {
        self.codec.delimiters()
    }

    /// Keep the cells and extents, encode and decode with `delims` from now on.
    pub fn redelimit(self, delims: Delimiters) -> Self {
        Self {
            grid: self.grid,
            codec: Codec::new(delims),
        }
    }

    /// Fallible variant of [`CellStore::add`] for indexes that may be `usize::MAX`.
    pub fn try_add(&mut self, row: usize, column: usize, content: impl Into<String>) -> Result<()> {
        self.grid.add(row, column, content.into())
    }

    /// Borrowing variant of [`CellStore::get`].
    pub fn cell(&self, row: usize, column: usize) -> Result<&str> {
        self.grid.cell(row, column)
    }

    /// Occupied cells in row-major index order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
        let mut coords: Vec<(usize, usize)> = self
            .grid
            .cells
            .iter()
            .flat_map(|(&r, row_map)| row_map.keys().map(move |&c| (r, c)))
            .collect();
        coords.sort_unstable();
        coords
            .into_iter()
            .map(move |(r, c)| (r, c, self.grid.cell_or_empty(r, c)))
    }

    /// Dense copy of one row, `columns()` wide.
    pub fn row(&self, row: usize) -> Result<Vec<String>> {
        if row >= self.grid.rows {
            return Err(Error::OutOfRange {
                row,
                column: 0,
                rows: self.grid.rows,
                columns: self.grid.columns,
            });
        }
        Ok((0..self.grid.columns)
            .map(|c| self.grid.cell_or_empty(row, c).to_string())
            .collect())
    }

    pub fn is_empty(&self) -> bool {
        self.grid.cells.is_empty()
    }

    pub fn load_str(&mut self, input: &str) -> Result<()> {
        self.grid.clear();
        let grid = &mut self.grid;
        let lines = self.codec.decode_lines(
            crate::decode::lines::iter(input).map(Ok::<_, io::Error>),
            |r, c, v| grid.insert_decoded(r, c, v),
        )?;
        self.grid.extend_rows(lines);
        debug!(rows = self.grid.rows, columns = self.grid.columns, "loaded table from string");
        Ok(())
    }

    pub fn store_string(&self) -> Result<String> {
        let grid = &self.grid;
        let out = self.codec.write_grid(
            grid.rows,
            grid.columns,
            |r, c| grid.cell_or_empty(r, c),
            Vec::new(),
        )?;
        String::from_utf8(out).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Rows as JSON arrays of strings.
    #[cfg(feature = "json")]
    pub fn to_json_rows(&self) -> serde_json::Value {
        let rows = (0..self.grid.rows)
            .map(|r| {
                (0..self.grid.columns)
                    .map(|c| serde_json::Value::from(self.grid.cell_or_empty(r, c)))
                    .collect::<Vec<_>>()
            })
            .map(serde_json::Value::Array)
            .collect();
        serde_json::Value::Array(rows)
    }
}

impl Default for SparseTable {
    fn default() -> Self {
        Self::office()
    }
}

impl CellStore for SparseTable {
    fn add(&mut self, row: usize, column: usize, content: impl Into<String>) {
        if let Err(e) = self.try_add(row, column, content) {
            panic!("{e}");
        }
    }

    fn get(&self, row: usize, column: usize) -> Result<String> {
        self.cell(row, column).map(str::to_string)
    }

    fn remove(&mut self, row: usize, column: usize) -> bool {
        self.grid.remove(row, column)
    }

    fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        self.grid.clear();
        let grid = &mut self.grid;
        let lines = self
            .codec
            .read_lines(BufReader::new(reader), |r, c, v| grid.insert_decoded(r, c, v))?;
        self.grid.extend_rows(lines);
        debug!(rows = self.grid.rows, columns = self.grid.columns, "loaded table");
        Ok(())
    }

    fn store<W: Write>(&self, writer: W) -> Result<()> {
        let grid = &self.grid;
        let out = self.codec.write_grid(
            grid.rows,
            grid.columns,
            |r, c| grid.cell_or_empty(r, c),
            BufWriter::new(writer),
        )?;
        out.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        debug!(rows = grid.rows, columns = grid.columns, "stored table");
        Ok(())
    }

    fn rows(&self) -> usize {
        self.grid.rows
    }

    fn columns(&self) -> usize {
        self.grid.columns
    }

    fn clear(&mut self) {
        self.grid.clear();
    }
}
