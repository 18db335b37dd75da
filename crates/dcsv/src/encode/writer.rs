use std::io::Write;

use crate::error::Result;
use crate::options::Delimiters;

/// Buffers one encoded row at a time and hands it to the underlying writer.
pub struct LineWriter<W: Write> {
    out: W,
    line: String,
    cells_in_line: usize,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
            cells_in_line: 0,
        }
    }

    /// Append a raw cell, escaping it and inserting the separator before it when needed.
    pub fn cell(&mut self, value: &str, delims: &Delimiters) {
        if self.cells_in_line > 0 {
            self.line.push_str(delims.field_separator());
        }
        crate::encode::escape::escape_cell_into(&mut self.line, value, delims);
        self.cells_in_line += 1;
    }

    /// Terminate the current row. Every row ends with `\n`, the last one included.
    pub fn end_line(&mut self) -> Result<()> {
        self.line.push('\n');
        self.out.write_all(self.line.as_bytes())?;
        self.line.clear();
        self.cells_in_line = 0;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
