//! # tabler
//!
//! A reader and writer for the tabler text format: an ordered list of flat
//! string-to-string records, one block of `key:value` lines per record, with
//! blank lines between records.
//!
//! ## The format in brief
//!
//! ```text
//! # comments start with '#'
//! name:Alice
//! role:admin
//!
//! %%bio:
//! Values spanning several lines
//! sit between %%key: and a closing %% line.
//! %%
//! name:Bob
//! ```
//!
//! See the [`format`] module for the full description.
//!
//! ## Quick Start
//!
//! ### Tables of strings
//!
//! ```rust
//! use tabler::{parse, serialize, ErrorKind};
//!
//! let table = parse(b"name:Alice\nrole:admin\n\nname:Bob\n").unwrap();
//! assert_eq!(table.len(), 2);
//! assert_eq!(table[0].get("role"), Some("admin"));
//!
//! // Every pair is written in multi-line form, so the output always reads back.
//! let bytes = serialize(&table);
//! assert_eq!(parse(&bytes).unwrap(), table);
//!
//! // Errors carry the line where they were detected.
//! let err = parse(b"name:Alice\n:oops\n").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ColonAtLineStart);
//! assert_eq!(err.line(), 2);
//! ```
//!
//! ### Rows of structs
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use tabler::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let users = vec![
//!     User { id: 1, name: "Alice".to_string(), active: true },
//!     User { id: 2, name: "Bob".to_string(), active: false },
//! ];
//!
//! let text = to_string(&users).unwrap();
//! let back: Vec<User> = from_str(&text).unwrap();
//! assert_eq!(users, back);
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade (`trace` per pair, `debug` per
//! record and per call, `info` for file access) and installs no logger.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

use log::info;

#[macro_use]
mod macros;

pub mod de;
pub mod error;
pub mod format;
pub mod map;
pub mod options;
mod parser;
pub mod ser;
pub mod table;

pub use de::{from_record, RecordDeserializer};
pub use error::{Error, ErrorKind, ParseError, Result};
pub use map::Record;
pub use options::{LonePercent, TablerOptions};
pub use ser::{to_record, Serializer};
pub use table::Table;

/// Parses a complete document into a [`Table`].
///
/// # Examples
///
/// ```rust
/// use tabler::parse;
///
/// let table = parse(b"%%a:\nb\n%%\n\n%%c:\nd\n%%\n").unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[1].get("c"), Some("d"));
/// ```
///
/// # Errors
///
/// Returns the first malformed construct found, with its 1-based line.
/// No partial table is returned.
pub fn parse(input: &[u8]) -> std::result::Result<Table, ParseError> {
    parser::parse_bytes(input, &TablerOptions::default())
}

/// Parses a complete document held in a `&str`.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_str(input: &str) -> std::result::Result<Table, ParseError> {
    parser::parse_str(input, &TablerOptions::default())
}

/// Parses a complete document with custom options.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_with_options(
    input: &[u8],
    options: &TablerOptions,
) -> std::result::Result<Table, ParseError> {
    parser::parse_bytes(input, options)
}

/// Serializes a [`Table`] to bytes.
///
/// # Examples
///
/// ```rust
/// use tabler::{serialize, table};
///
/// let out = serialize(&table![{ "k" => "v" }]);
/// assert_eq!(out, b"%%k:\nv\n%%\n\n");
/// ```
///
/// Keys are written as they are. A key that is empty, contains `:` or a
/// newline, or starts with `%%` produces output that fails to parse or parses
/// to a different table; use [`serialize_checked`] to reject such keys.
#[must_use]
pub fn serialize(table: &Table) -> Vec<u8> {
    serialize_to_string(table).into_bytes()
}

/// Serializes a [`Table`] to bytes after checking that every key can be read back.
///
/// # Examples
///
/// ```rust
/// use tabler::{serialize_checked, table};
///
/// assert!(serialize_checked(&table![{ "k" => "v" }]).is_ok());
/// assert!(serialize_checked(&table![{ "a:b" => "v" }]).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Record`] naming the first record with an unwritable key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_checked(table: &Table) -> Result<Vec<u8>> {
    ser::check_table(table)?;
    Ok(serialize(table))
}

/// Serializes a [`Table`] to a `String`.
#[must_use]
pub fn serialize_to_string(table: &Table) -> String {
    let mut serializer = Serializer::new(TablerOptions::default());
    serializer.write_table(table);
    serializer.into_inner()
}

/// Serializes a [`Table`] to bytes with custom options.
#[must_use]
pub fn serialize_with_options(table: &Table, options: &TablerOptions) -> Vec<u8> {
    let mut serializer = Serializer::new(options.clone());
    serializer.write_table(table);
    serializer.into_inner().into_bytes()
}

/// Reads a reader to its end and parses the contents.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let table = tabler::read(Cursor::new("a:1\n")).unwrap();
/// assert_eq!(table[0].get("a"), Some("1"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Parse`] if the contents
/// are malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read<R>(mut reader: R) -> Result<Table>
where
    R: io::Read,
{
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(parse(&data)?)
}

/// Writes the serialized form of `table` to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write<W>(mut writer: W, table: &Table) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(&serialize(table))?;
    writer.flush()?;
    Ok(())
}

/// Reads and parses the file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`] if
/// its contents are malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read_file(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    info!("Reading table from {}", path.display());
    let data = fs::read(path)?;
    Ok(parse(&data)?)
}

/// Creates (or truncates) the file at `path` and writes `table` to it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_file(path: impl AsRef<Path>, table: &Table) -> Result<()> {
    let path = path.as_ref();
    info!("Writing {} records to {}", table.len(), path.display());
    fs::write(path, serialize(table))?;
    Ok(())
}

/// Converts rows of any flat `T: Serialize` into a [`Table`], one record per row.
///
/// # Errors
///
/// Returns [`Error::Record`] naming the first row that cannot be converted.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_table<'a, I, T>(rows: I) -> Result<Table>
where
    I: IntoIterator<Item = &'a T>,
    T: 'a + ?Sized + Serialize,
{
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| to_record(row).map_err(|e| e.in_record(index)))
        .collect()
}

/// Serializes rows of any flat `T: Serialize` to tabler text.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = tabler::to_string(&[Point { x: 1, y: 2 }]).unwrap();
/// assert_eq!(text, "%%x:\n1\n%%\n%%y:\n2\n%%\n\n");
/// ```
///
/// # Errors
///
/// Same as [`to_table`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<'a, I, T>(rows: I) -> Result<String>
where
    I: IntoIterator<Item = &'a T>,
    T: 'a + ?Sized + Serialize,
{
    Ok(serialize_to_string(&to_table(rows)?))
}

/// Serializes rows of any flat `T: Serialize` to a writer.
///
/// # Errors
///
/// Returns an error if a row cannot be converted or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<'a, W, I, T>(writer: W, rows: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a T>,
    T: 'a + ?Sized + Serialize,
{
    write(writer, &to_table(rows)?)
}

/// Deserializes every record of `table` into a `T`.
///
/// # Errors
///
/// Returns [`Error::Record`] naming the first record that does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_table<T>(table: &Table) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    table
        .iter()
        .enumerate()
        .map(|(index, record)| from_record(record).map_err(|e| e.in_record(index)))
        .collect()
}

/// Parses tabler text and deserializes every record into a `T`.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let points: Vec<Point> = tabler::from_str("x:1\ny:2\n\nx:3\ny:4\n").unwrap();
/// assert_eq!(points, vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed text and [`Error::Record`] when a
/// record does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    from_table(&parse_str(s)?)
}

/// Parses tabler bytes and deserializes every record into a `T`.
///
/// # Errors
///
/// Same as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    from_table(&parse(v)?)
}

/// Reads tabler text from a reader and deserializes every record into a `T`.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise the same as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<Vec<T>>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_table(&read(reader)?)
}
