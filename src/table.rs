//! The ordered sequence of records produced by the parser.

use crate::Record;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered sequence of [`Record`]s.
///
/// Records keep the order in which they appeared in the input (or were pushed).
/// The parser never merges or reorders them.
///
/// # Examples
///
/// ```rust
/// use tabler::{Record, Table};
///
/// let mut table = Table::new();
/// let mut record = Record::new();
/// record.insert("name", "Alice");
/// table.push(record);
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table[0].get("name"), Some("Alice"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table(Vec<Record>);

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Table(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Table(Vec::with_capacity(capacity))
    }

    /// Appends a record at the end of the table.
    pub fn push(&mut self, record: Record) {
        self.0.push(record);
    }

    /// Returns the record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.0.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Record> {
        self.0.iter_mut()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.0
    }

    /// Consumes the table and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.0
    }
}

impl Index<usize> for Table {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.0[index]
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Table(records)
    }
}

impl From<Table> for Vec<Record> {
    fn from(table: Table) -> Self {
        table.0
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Table(iter.into_iter().collect())
    }
}

impl Extend<Record> for Table {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
