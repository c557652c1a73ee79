//! Deserializing records into Rust types.
//!
//! Every [`Record`] is presented to serde as a map whose keys are the record's
//! keys and whose values are strings. Scalar targets (`u32`, `bool`, `f64`,
//! `char`, unit enum variants, ...) are parsed from that string, so a plain
//! struct can be read straight out of a table:
//!
//! ```rust
//! use serde::Deserialize;
//! use tabler::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Host { name: String, port: u16 }
//!
//! let hosts: Vec<Host> = from_str("name:db\nport:5432\n\nname:cache\nport:6379\n").unwrap();
//! assert_eq!(hosts[1], Host { name: "cache".into(), port: 6379 });
//! ```
//!
//! An empty value reads as `None` when the target is an `Option`.

use crate::{Error, Record, Result};
use serde::de::{self, DeserializeSeed, IntoDeserializer, MapAccess, Visitor};
use serde::forward_to_deserialize_any;

/// Deserializes one [`Record`] into `T`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use tabler::{from_record, record};
///
/// let map: HashMap<String, String> = from_record(&record! { "a" => "1" }).unwrap();
/// assert_eq!(map["a"], "1");
/// ```
///
/// # Errors
///
/// Returns an error if a value cannot be parsed as the field's type or a
/// required field is missing.
pub fn from_record<T>(record: &Record) -> Result<T>
where
    T: de::DeserializeOwned,
{
    T::deserialize(RecordDeserializer::new(record))
}

/// A serde `Deserializer` over a single [`Record`].
pub struct RecordDeserializer<'a> {
    record: &'a Record,
}

impl<'a> RecordDeserializer<'a> {
    pub fn new(record: &'a Record) -> Self {
        RecordDeserializer { record }
    }
}

impl<'de, 'a> de::Deserializer<'de> for RecordDeserializer<'a> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(RecordAccess {
            iter: self.record.iter(),
            value: None,
        })
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct RecordAccess<'a> {
    iter: indexmap::map::Iter<'a, String, String>,
    value: Option<(&'a str, &'a str)>,
}

impl<'de, 'a> MapAccess<'de> for RecordAccess<'a> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some((key.as_str(), value.as_str()));
                seed.deserialize(key.as_str().into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        let (key, value) = self
            .value
            .take()
            .ok_or_else(|| Error::custom("next_value called before next_key"))?;
        seed.deserialize(FieldDeserializer { key, value })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Reads one field's text as whatever scalar the target asks for.
struct FieldDeserializer<'a> {
    key: &'a str,
    value: &'a str,
}

impl<'a> FieldDeserializer<'a> {
    fn parse<T>(&self, expected: &str) -> Result<T>
    where
        T: std::str::FromStr,
    {
        self.value.parse().map_err(|_| {
            Error::custom(format!(
                "field {:?}: expected {}, found {:?}",
                self.key, expected, self.value
            ))
        })
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: Visitor<'de>,
            {
                visitor.$visit(self.parse::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'de, 'a> de::Deserializer<'de> for FieldDeserializer<'a> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_str(self.value)
    }

    deserialize_parsed! {
        deserialize_bool => visit_bool: bool,
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
        deserialize_f32 => visit_f32: f32,
        deserialize_f64 => visit_f64: f64,
        deserialize_char => visit_char: char,
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.value.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_enum(self.value.into_deserializer())
    }

    forward_to_deserialize_any! {
        str string bytes byte_buf unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}
