//! Line codec: composes the escaper and tokenizer with line splitting/joining.

use std::io::{self, BufRead, Write};

use crate::decode::tokenizer::Tokenizer;
use crate::encode::writer::LineWriter;
use crate::error::Result;
use crate::options::Delimiters;

#[derive(Debug, Clone)]
pub struct Codec {
    tokenizer: Tokenizer,
}

impl Codec {
    pub fn new(delims: Delimiters) -> Self {
        Self {
            tokenizer: Tokenizer::new(delims),
        }
    }

    pub fn delimiters(&self) -> &Delimiters {
        self.tokenizer.delimiters()
    }

    pub fn decode_line(&self, line: &str) -> Vec<String> {
        self.tokenizer.split(line)
    }

    /// Write a `rows` x `columns` grid in index order, one line per row.
    ///
    /// `cell` is asked for every coordinate in range, so sparse sources answer
    /// `""` for holes.
    pub fn write_grid<'a, W, F>(&self, rows: usize, columns: usize, mut cell: F, out: W) -> Result<W>
    where
        W: Write,
        F: FnMut(usize, usize) -> &'a str,
    {
        let delims = self.delimiters();
        let mut w = LineWriter::new(out);
        for r in 0..rows {
            for c in 0..columns {
                w.cell(cell(r, c), delims);
            }
            w.end_line()?;
        }
        w.finish()
    }

    /// Tokenize each line and feed `(row, column, value)` to `sink`.
    ///
    /// Row index is the line index, blank lines included. Returns the number of
    /// lines consumed. On a read error the fields of earlier lines have already
    /// been delivered.
    pub fn decode_lines<I, L, F>(&self, lines: I, mut sink: F) -> Result<usize>
    where
        I: IntoIterator<Item = io::Result<L>>,
        L: AsRef<str>,
        F: FnMut(usize, usize, String),
    {
        let mut count = 0usize;
        for (row, line) in lines.into_iter().enumerate() {
            let line = line?;
            for (column, field) in self.decode_line(line.as_ref()).into_iter().enumerate() {
                sink(row, column, field);
            }
            count = row + 1;
        }
        Ok(count)
    }

    pub fn read_lines<R, F>(&self, reader: R, sink: F) -> Result<usize>
    where
        R: BufRead,
        F: FnMut(usize, usize, String),
    {
        self.decode_lines(reader.lines(), sink)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(Delimiters::office())
    }
}
