//! The per-record key/value container.
//!
//! A [`Record`] is a thin wrapper around [`IndexMap`]. Keys are unique, and
//! inserting an existing key replaces its value (last write wins).
//!
//! ## Ordering
//!
//! The format attaches no meaning to the order of keys inside a record.
//! `Record` still iterates in insertion order so that output is deterministic,
//! but equality ignores order: two records are equal when they hold the same
//! set of pairs.
//!
//! ```rust
//! use tabler::Record;
//!
//! let mut a = Record::new();
//! a.insert("x", "1");
//! a.insert("y", "2");
//!
//! let b: Record = [("y", "2"), ("x", "1")].into_iter().collect();
//! assert_eq!(a, b);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ops::Index;

/// One block of the format: unique string keys mapped to string values.
///
/// # Examples
///
/// ```rust
/// use tabler::Record;
///
/// let mut record = Record::new();
/// assert!(record.insert("name", "Alice").is_none());
/// assert_eq!(record.insert("name", "Bob").as_deref(), Some("Alice"));
/// assert_eq!(record.get("name"), Some("Bob"));
/// assert_eq!(record.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, String>);

impl Record {
    /// Creates an empty `Record`.
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty `Record` with room for `capacity` pairs.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts a pair, returning the value previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if the record holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`, keeping the relative order of the remaining pairs.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes every pair, keeping the allocation.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Sorts the pairs by key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabler::Record;
    ///
    /// let mut record: Record = [("b", "2"), ("a", "1")].into_iter().collect();
    /// record.sort_keys();
    /// let keys: Vec<_> = record.keys().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn sort_keys(&mut self) {
        self.0.sort_keys();
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.values().map(String::as_str)
    }

    /// Returns an iterator over the pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl Index<&str> for Record {
    type Output = str;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(value) => value,
            None => panic!("no entry found for key {:?}", key),
        }
    }
}

impl From<HashMap<String, String>> for Record {
    fn from(map: HashMap<String, String>) -> Self {
        Record(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for Record {
    fn from(map: BTreeMap<String, String>) -> Self {
        Record(map.into_iter().collect())
    }
}

impl From<Record> for HashMap<String, String> {
    fn from(record: Record) -> Self {
        record.0.into_iter().collect()
    }
}

impl From<Record> for BTreeMap<String, String> {
    fn from(record: Record) -> Self {
        record.0.into_iter().collect()
    }
}

impl IntoIterator for Record {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Record(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Record {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
