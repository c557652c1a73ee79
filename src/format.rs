//! The tabler text format
//!
//! This module documents the format as read by [`parse`](crate::parse) and
//! written by [`serialize`](crate::serialize). It contains no code.
//!
//! # Overview
//!
//! A document is an ordered list of records. A record is a set of `key:value`
//! pairs; records are separated by blank lines. There is no header, magic
//! number or file extension.
//!
//! ```text
//! # hosts
//! name:db
//! port:5432
//!
//! %%motd:
//! Welcome!
//! Maintenance: Sunday
//! %%
//! name:cache
//! ```
//!
//! reads as two records: `{name: db, port: 5432}` and
//! `{motd: "Welcome!\nMaintenance: Sunday", name: cache}`.
//!
//! # Lines
//!
//! `\n` is the only line terminator. `\r` is ordinary content, so CRLF input
//! is not supported.
//!
//! | Line | Meaning |
//! |------|---------|
//! | empty | ends the current record (ignored if the record has no pairs) |
//! | `# ...` | comment, discarded |
//! | `key:value` | simple pair |
//! | `%%key:` | opens a multi-line pair |
//! | `%%` | closes the open multi-line pair |
//!
//! # Simple pairs
//!
//! The key runs up to the first `:`; everything after it, further colons
//! included, is the value. Keys are kept as written. Values are trimmed of
//! surrounding whitespace.
//!
//! A line that ends without a `:` is an error
//! ([`NoKeyFound`](crate::ErrorKind::NoKeyFound)), and so is a line whose
//! first character is `:` ([`ColonAtLineStart`](crate::ErrorKind::ColonAtLineStart)).
//!
//! # Multi-line pairs
//!
//! ```text
//! %%key:
//! any text, including
//!
//! blank lines, # hashes and key: value lines
//! %%
//! ```
//!
//! Everything between the `:` and the closing `%%` line is the value,
//! newlines included, trimmed of surrounding whitespace. Text may follow the
//! `:` on the opening line. Only whitespace may follow the closing `%%` on its
//! line. The newline after a closing `%%` does not count as a blank line.
//!
//! A line of a multi-line value that starts with `%%` always closes it; the
//! format has no escape for that.
//!
//! # Lone `%`
//!
//! A line starting with a single `%` that is not followed by another `%` is
//! ordinary content. Older readers dropped that `%`; see
//! [`LonePercent`](crate::LonePercent).
//!
//! # Comments
//!
//! A `#` is a comment marker only as the first character of a line outside a
//! multi-line value. Comment lines do not end a record.
//!
//! # Repeated keys
//!
//! A key repeated within one record keeps its last value.
//!
//! # End of input
//!
//! The last line does not need a trailing `\n`, and the last record does not
//! need a trailing blank line. A key line without its `:` or a multi-line
//! value without its closing `%%` at the very end of the input is dropped.
//!
//! # Encoding
//!
//! Input is read as UTF-8. Bytes that do not decode are read as U+FFFD and
//! are otherwise ordinary content.
//!
//! # Writing
//!
//! [`serialize`](crate::serialize) writes every pair in multi-line form and
//! ends every record with a blank line:
//!
//! ```text
//! %%name:
//! db
//! %%
//! %%port:
//! 5432
//! %%
//!
//! ```
