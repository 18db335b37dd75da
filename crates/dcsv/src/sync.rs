//! Whole-operation locking around any [`CellStore`].
//!
//! Every call takes the same lock for its full duration, `load`/`store`
//! included, so operations on one wrapped table never interleave. There is no
//! grouping of several calls into one critical section.

use std::io::{Read, Write};

use parking_lot::Mutex;

use crate::error::Result;
use crate::table::CellStore;

#[derive(Debug, Default)]
pub struct SyncTable<T> {
    inner: Mutex<T>,
}

impl<T: CellStore> SyncTable<T> {
    pub fn new(table: T) -> Self {
        Self {
            inner: Mutex::new(table),
        }
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }

    pub fn add(&self, row: usize, column: usize, content: impl Into<String>) {
        self.inner.lock().add(row, column, content)
    }

    pub fn get(&self, row: usize, column: usize) -> Result<String> {
        self.inner.lock().get(row, column)
    }

    pub fn remove(&self, row: usize, column: usize) -> bool {
        self.inner.lock().remove(row, column)
    }

    pub fn load<R: Read>(&self, reader: R) -> Result<()> {
        self.inner.lock().load(reader)
    }

    pub fn store<W: Write>(&self, writer: W) -> Result<()> {
        self.inner.lock().store(writer)
    }

    pub fn rows(&self) -> usize {
        self.inner.lock().rows()
    }

    pub fn columns(&self) -> usize {
        self.inner.lock().columns()
    }

    pub fn clear(&self) {
        self.inner.lock().clear()
    }
}

impl<T: CellStore> CellStore for SyncTable<T> {
    fn add(&mut self, row: usize, column: usize, content: impl Into<String>) {
        self.inner.lock().add(row, column, content)
    }

    fn get(&self, row: usize, column: usize) -> Result<String> {
        self.inner.lock().get(row, column)
    }

    fn remove(&mut self, row: usize, column: usize) -> bool {
        self.inner.lock().remove(row, column)
    }

    fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        self.inner.lock().load(reader)
    }

    fn store<W: Write>(&self, writer: W) -> Result<()> {
        self.inner.lock().store(writer)
    }

    fn rows(&self) -> usize {
        self.inner.lock().rows()
    }

    fn columns(&self) -> usize {
        self.inner.lock().columns()
    }

    fn clear(&mut self) {
        self.inner.lock().clear()
    }
}

/// Lets a shared reference stand in wherever a `CellStore` is expected.
impl<T: CellStore> CellStore for &SyncTable<T> {
    fn add(&mut self, row: usize, column: usize, content: impl Into<String>) {
        self.inner.lock().add(row, column, content)
    }

    fn get(&self, row: usize, column: usize) -> Result<String> {
        self.inner.lock().get(row, column)
    }

    fn remove(&mut self, row: usize, column: usize) -> bool {
        self.inner.lock().remove(row, column)
    }

    fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        self.inner.lock().load(reader)
    }

    fn store<W: Write>(&self, writer: W) -> Result<()> {
        self.inner.lock().store(writer)
    }

    fn rows(&self) -> usize {
        self.inner.lock().rows()
    }

    fn columns(&self) -> usize {
        self.inner.lock().columns()
    }

    fn clear(&mut self) {
        self.inner.lock().clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SparseTable;

    fn fill<S: CellStore>(mut store: S) -> S {
        store.add(0, 0, "a");
        store.add(1, 2, "b");
        store
    }

    #[test]
    fn wrapped_and_plain_tables_are_interchangeable() {
        let plain = fill(SparseTable::office());
        let wrapped = fill(SyncTable::new(SparseTable::office()));
        assert_eq!(plain.rows(), CellStore::rows(&wrapped));
        assert_eq!(wrapped.get(1, 2).unwrap(), "b");
        assert_eq!(wrapped.into_inner().columns(), 3);
    }

    #[test]
    fn shared_reference_is_a_store() {
        let table = SyncTable::new(SparseTable::office());
        let _ = fill(&table);
        assert_eq!((table.rows(), table.columns()), (2, 3));
        assert!(table.remove(1, 2));
        assert_eq!((table.rows(), table.columns()), (1, 1));
    }
}
