//! Configuration options for parsing and serialization.
//!
//! - [`TablerOptions`]: main configuration struct
//! - [`LonePercent`]: what the parser does with a `%` at the start of a line
//!   that turns out not to be half of a `%%` marker
//!
//! ## Examples
//!
//! ```rust
//! use tabler::{parse_with_options, LonePercent, TablerOptions};
//!
//! let input = b"%rate:5\n";
//!
//! let table = parse_with_options(input, &TablerOptions::new()).unwrap();
//! assert_eq!(table[0].get("%rate"), Some("5"));
//!
//! let table = parse_with_options(input, &TablerOptions::legacy()).unwrap();
//! assert_eq!(table[0].get("rate"), Some("5"));
//! ```

/// Handling of a single `%` at the start of a line.
///
/// A line starting with `%` is first read as the opening of a `%%` marker.
/// When the next character is not `%`, the pending `%` is either kept as
/// ordinary content or discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LonePercent {
    /// Append the `%` to the key or value being read.
    #[default]
    Preserve,
    /// Discard the `%`, matching older readers of the format.
    Drop,
}

/// Configuration options for tabler reading and writing.
///
/// # Examples
///
/// ```rust
/// use tabler::{LonePercent, TablerOptions};
///
/// let options = TablerOptions::new()
///     .with_lone_percent(LonePercent::Drop)
///     .with_sorted_keys(true);
/// assert_eq!(options.lone_percent, LonePercent::Drop);
/// assert!(options.sort_keys);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TablerOptions {
    pub lone_percent: LonePercent,
    pub sort_keys: bool,
}

impl TablerOptions {
    /// Creates default options: lone `%` preserved, keys written in insertion order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that drop a lone leading `%`, as older readers did.
    #[must_use]
    pub fn legacy() -> Self {
        TablerOptions {
            lone_percent: LonePercent::Drop,
            ..Default::default()
        }
    }

    /// Sets the lone `%` policy used by the parser.
    #[must_use]
    pub fn with_lone_percent(mut self, lone_percent: LonePercent) -> Self {
        self.lone_percent = lone_percent;
        self
    }

    /// Makes the serializer write each record's pairs sorted by key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabler::{serialize_with_options, Record, Table, TablerOptions};
    ///
    /// let record: Record = [("b", "2"), ("a", "1")].into_iter().collect();
    /// let table = Table::from(vec![record]);
    /// let out = serialize_with_options(&table, &TablerOptions::new().with_sorted_keys(true));
    /// assert_eq!(out, b"%%a:\n1\n%%\n%%b:\n2\n%%\n\n");
    /// ```
    #[must_use]
    pub fn with_sorted_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}
