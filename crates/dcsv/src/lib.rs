#![doc = include_str!("../README.md")]

pub mod codec;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod sync;
pub mod table;

pub use crate::codec::Codec;
pub use crate::error::{Error, Result};
pub use crate::options::{Delimiters, Preset};
pub use crate::sync::SyncTable;
pub use crate::table::{CellStore, SparseTable};

use std::io::{Read, Write};

pub fn encode_to_string<S: CellStore>(table: &S) -> Result<String> {
    let mut buf = Vec::new();
    table.store(&mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn encode_to_writer<W: Write, S: CellStore>(writer: W, table: &S) -> Result<()> {
    table.store(writer)
}

pub fn decode_from_str(s: &str, delims: Delimiters) -> Result<SparseTable> {
    let mut table = SparseTable::new(delims);
    table.load_str(s)?;
    Ok(table)
}

pub fn decode_from_reader<R: Read>(reader: R, delims: Delimiters) -> Result<SparseTable> {
    let mut table = SparseTable::new(delims);
    table.load(reader)?;
    Ok(table)
}
