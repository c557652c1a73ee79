//! Tabler serialization.
//!
//! Two layers live here:
//!
//! - [`Serializer`] writes a [`Table`] using the fixed multi-line template for
//!   every pair:
//!
//!   ```text
//!   %%<key>:
//!   <value>
//!   %%
//!   ```
//!
//!   with one blank line after each record. The marker form is used even for
//!   one-line values, so the output always parses back.
//!
//! - [`to_record`] turns any flat `T: Serialize` (a struct or a map of scalars)
//!   into a [`Record`], which is how [`to_string`](crate::to_string) and
//!   [`to_table`](crate::to_table) work.
//!
//! ## Limitations
//!
//! A value containing a line that starts with `%%` cannot be written
//! losslessly: the parser reads such a line as the closing marker. No escape
//! exists in the format.
//!
//! ## Examples
//!
//! ```rust
//! use tabler::{Serializer, TablerOptions, record};
//!
//! let mut serializer = Serializer::new(TablerOptions::new());
//! serializer.write_record(&record! { "name" => "Alice" });
//! assert_eq!(serializer.into_inner(), "%%name:\nAlice\n%%\n\n");
//! ```

use crate::{Error, Record, Result, Table, TablerOptions};
use log::debug;
use serde::ser::{self, Impossible, Serialize};

const MARKER: &str = "%%";

/// The tabler serializer.
///
/// Accumulates output in a `String`; created via [`Serializer::new`].
pub struct Serializer {
    output: String,
    options: TablerOptions,
}

impl Serializer {
    pub fn new(options: TablerOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends one record followed by its blank line.
    pub fn write_record(&mut self, record: &Record) {
        if self.options.sort_keys {
            let mut pairs: Vec<_> = record.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in pairs {
                self.write_pair(key, value);
            }
        } else {
            for (key, value) in record {
                self.write_pair(key, value);
            }
        }
        self.output.push('\n');
    }

    /// Appends every record of `table`, in order.
    pub fn write_table(&mut self, table: &Table) {
        for record in table {
            self.write_record(record);
        }
        debug!(
            "serialized {} records into {} bytes",
            table.len(),
            self.output.len()
        );
    }

    #[inline]
    fn write_pair(&mut self, key: &str, value: &str) {
        self.output.reserve(key.len() + value.len() + 8);
        self.output.push_str(MARKER);
        self.output.push_str(key);
        self.output.push_str(":\n");
        self.output.push_str(value);
        self.output.push('\n');
        self.output.push_str(MARKER);
        self.output.push('\n');
    }
}

/// Checks every key of `table`, reporting the first bad one with its record index.
pub(crate) fn check_table(table: &Table) -> Result<()> {
    for (index, record) in table.iter().enumerate() {
        for key in record.keys() {
            check_key(key).map_err(|err| err.in_record(index))?;
        }
    }
    Ok(())
}

/// Rejects keys the parser could not read back.
pub(crate) fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_key(key, "keys must not be empty"));
    }
    if key.contains(':') {
        return Err(Error::invalid_key(key, "keys must not contain ':'"));
    }
    if key.contains('\n') {
        return Err(Error::invalid_key(key, "keys must not contain a newline"));
    }
    if key.starts_with(MARKER) {
        return Err(Error::invalid_key(key, "keys must not start with %%"));
    }
    Ok(())
}

/// Converts a flat `T: Serialize` into a [`Record`].
///
/// Struct fields and map entries become pairs; `None` fields are left out.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use tabler::to_record;
///
/// #[derive(Serialize)]
/// struct Host { name: String, port: u16, alias: Option<String> }
///
/// let host = Host { name: "db".into(), port: 5432, alias: None };
/// let record = to_record(&host).unwrap();
/// assert_eq!(record.get("port"), Some("5432"));
/// assert!(!record.contains_key("alias"));
/// ```
///
/// # Errors
///
/// Returns an error if `T` is not a struct or map, if a field holds a nested
/// sequence or map, or if a key cannot be written in the format.
pub fn to_record<T>(value: &T) -> Result<Record>
where
    T: ?Sized + Serialize,
{
    value.serialize(RecordSerializer)
}

/// Serializes the top level of a row into a [`Record`].
struct RecordSerializer;

fn not_a_record<T>(found: &str) -> Result<T> {
    Err(Error::unsupported_type(&format!(
        "a record must be a struct or map, found {}",
        found
    )))
}

impl ser::Serializer for RecordSerializer {
    type Ok = Record;
    type Error = Error;

    type SerializeSeq = Impossible<Record, Error>;
    type SerializeTuple = Impossible<Record, Error>;
    type SerializeTupleStruct = Impossible<Record, Error>;
    type SerializeTupleVariant = Impossible<Record, Error>;
    type SerializeMap = RecordBuilder;
    type SerializeStruct = RecordBuilder;
    type SerializeStructVariant = Impossible<Record, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Record> {
        not_a_record("bool")
    }

    fn serialize_i8(self, _v: i8) -> Result<Record> {
        not_a_record("integer")
    }

    fn serialize_i16(self, _v: i16) -> Result<Record> {
        not_a_record("integer")
    }

    fn serialize_i32(self, _v: i32) -> Result<Record> {
        not_a_record("integer")
    }

    fn serialize_i64(self, _v: i64) -> Result<Record> {
        not_a_record("integer")
    }

    fn serialize_u8(self, _v: u8) -> Result<Record> {
        not_a_record("integer")
    }

    fn serialize_u16(self, _v: u16) -> Result<Record> {
        not_a_record("integer")
    }

    fn serialize_u32(self, _v: u32) -> Result<Record> {
        not_a_record("integer")
    }

    fn serialize_u64(self, _v: u64) -> Result<Record> {
        not_a_record("integer")
    }

    fn serialize_f32(self, _v: f32) -> Result<Record> {
        not_a_record("float")
    }

    fn serialize_f64(self, _v: f64) -> Result<Record> {
        not_a_record("float")
    }

    fn serialize_char(self, _v: char) -> Result<Record> {
        not_a_record("char")
    }

    fn serialize_str(self, _v: &str) -> Result<Record> {
        not_a_record("string")
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Record> {
        not_a_record("bytes")
    }

    fn serialize_none(self) -> Result<Record> {
        not_a_record("none")
    }

    fn serialize_some<T>(self, value: &T) -> Result<Record>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Record> {
        not_a_record("unit")
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Record> {
        not_a_record(name)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Record> {
        not_a_record(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Record>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Record>
    where
        T: ?Sized + Serialize,
    {
        not_a_record(variant)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        not_a_record("sequence")
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        not_a_record("tuple")
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        not_a_record(name)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        not_a_record(variant)
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(RecordBuilder::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(RecordBuilder::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        not_a_record(variant)
    }
}

/// Collects fields or map entries into a [`Record`].
struct RecordBuilder {
    record: Record,
    pending_key: Option<String>,
}

impl RecordBuilder {
    fn new(capacity: usize) -> Self {
        RecordBuilder {
            record: Record::with_capacity(capacity),
            pending_key: None,
        }
    }

    fn insert<T>(&mut self, key: String, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        check_key(&key)?;
        if let Some(text) = value.serialize(FieldSerializer)? {
            self.record.insert(key, text);
        }
        Ok(())
    }
}

impl ser::SerializeMap for RecordBuilder {
    type Ok = Record;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(FieldSerializer)? {
            Some(key) => {
                self.pending_key = Some(key);
                Ok(())
            }
            None => Err(Error::custom("map keys must not be None")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called before serialize_key"))?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Record> {
        Ok(self.record)
    }
}

impl ser::SerializeStruct for RecordBuilder {
    type Ok = Record;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Record> {
        Ok(self.record)
    }
}

/// Serializes one scalar field to its text; `None` means "leave the field out".
struct FieldSerializer;

fn not_a_field<T>(found: &str) -> Result<T> {
    Err(Error::unsupported_type(&format!(
        "record fields must be scalars, found {}",
        found
    )))
}

impl ser::Serializer for FieldSerializer {
    type Ok = Option<String>;
    type Error = Error;

    type SerializeSeq = Impossible<Option<String>, Error>;
    type SerializeTuple = Impossible<Option<String>, Error>;
    type SerializeTupleStruct = Impossible<Option<String>, Error>;
    type SerializeTupleVariant = Impossible<Option<String>, Error>;
    type SerializeMap = Impossible<Option<String>, Error>;
    type SerializeStruct = Impossible<Option<String>, Error>;
    type SerializeStructVariant = Impossible<Option<String>, Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        match std::str::from_utf8(v) {
            Ok(text) => Ok(Some(text.to_string())),
            Err(_) => not_a_field("non UTF-8 bytes"),
        }
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(Some(String::new()))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(Some(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        not_a_field(variant)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        not_a_field("sequence")
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        not_a_field("tuple")
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        not_a_field(name)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        not_a_field(variant)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        not_a_field("map")
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        not_a_field(name)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        not_a_field(variant)
    }
}
