//! The tabler parser.
//!
//! A single-pass scanner that walks the input one `char` at a time. Every
//! character is handled by the transition function of the current [`State`],
//! which returns the next state or the kind of error detected. `\n` is the only
//! line terminator; `:`, `%` and `#` are significant only in some states.
//!
//! ## States
//!
//! ```text
//!              '%'            '%'                 ':'
//! LineStart ───────> Percent ─────> MarkerKey ─────────> MultiValue <──┐
//!   │  │  ^            │ other        │ '%' (empty key)     │ '%' at   │ other
//!   │  │  │            v              v                     v line start│
//!   │  │  │           Key          MarkerPercent        MultiPercent ───┘
//!   │  │  │            │ ':'          '%' => DanglingMultilineMarker
//!   │  │  │            v                                    │ '%'
//!   │  │  └─── '\n' ── Value                                v
//!   │  └──'#'──> Comment ──'\n'──> LineStart          AfterClose ──'\n'──> LineStart
//!   └─ '\n': seal the current record
//! ```
//!
//! The scanner owns the accumulating key and value buffers, the record being
//! filled, and the table of sealed records. Nothing is shared between calls.

use crate::error::{ErrorKind, ParseError};
use crate::options::{LonePercent, TablerOptions};
use crate::{Record, Table};
use log::{debug, trace};

/// Lexical state of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// First character of a line outside any multi-line value.
    LineStart,
    /// A `%` opened the line; the next character decides if it is a marker.
    Percent,
    /// Inside a `#` comment line.
    Comment,
    /// Reading a simple key, no `:` seen yet.
    Key,
    /// Reading a simple value after `key:`.
    Value,
    /// After an opening `%%`, reading the key up to its `:`.
    MarkerKey,
    /// A `%` directly followed the opening `%%`.
    MarkerPercent,
    /// Reading a multi-line value.
    MultiValue { at_line_start: bool },
    /// A `%` opened a line inside a multi-line value.
    MultiPercent,
    /// A closing `%%` was read; only the end of its line may follow.
    AfterClose,
}

struct Scanner {
    lone_percent: LonePercent,
    state: State,
    key: String,
    value: String,
    record: Record,
    table: Table,
    line: usize,
}

impl Scanner {
    fn new(lone_percent: LonePercent) -> Self {
        Scanner {
            lone_percent,
            state: State::LineStart,
            key: String::new(),
            value: String::new(),
            record: Record::new(),
            table: Table::new(),
            line: 1,
        }
    }

    fn feed_str(&mut self, input: &str) -> Result<(), ParseError> {
        input.chars().try_for_each(|ch| self.feed(ch))
    }

    fn feed(&mut self, ch: char) -> Result<(), ParseError> {
        match self.transition(ch) {
            Ok(next) => {
                if ch == '\n' {
                    self.line += 1;
                }
                self.state = next;
                Ok(())
            }
            Err(kind) => Err(ParseError::new(kind, self.line)),
        }
    }

    fn transition(&mut self, ch: char) -> Result<State, ErrorKind> {
        match self.state {
            State::LineStart => self.line_start(ch),
            State::Percent => self.percent(ch),
            State::Comment => Ok(Self::comment(ch)),
            State::Key => self.key(ch),
            State::Value => self.value(ch),
            State::MarkerKey => self.marker_key(ch),
            State::MarkerPercent => self.marker_percent(ch),
            State::MultiValue { at_line_start } => Ok(self.multi_value(at_line_start, ch)),
            State::MultiPercent => self.multi_percent(ch),
            State::AfterClose => Self::after_close(ch),
        }
    }

    fn line_start(&mut self, ch: char) -> Result<State, ErrorKind> {
        match ch {
            '%' => Ok(State::Percent),
            '\n' => {
                self.seal();
                Ok(State::LineStart)
            }
            '#' => Ok(State::Comment),
            _ => self.key(ch),
        }
    }

    fn percent(&mut self, ch: char) -> Result<State, ErrorKind> {
        if ch == '%' {
            return Ok(State::MarkerKey);
        }
        if self.lone_percent == LonePercent::Preserve {
            self.key.push('%');
        }
        self.key(ch)
    }

    fn comment(ch: char) -> State {
        if ch == '\n' {
            State::LineStart
        } else {
            State::Comment
        }
    }

    fn key(&mut self, ch: char) -> Result<State, ErrorKind> {
        match ch {
            ':' if self.key.is_empty() => Err(ErrorKind::ColonAtLineStart),
            ':' => Ok(State::Value),
            '\n' => Err(ErrorKind::NoKeyFound),
            _ => {
                self.key.push(ch);
                Ok(State::Key)
            }
        }
    }

    fn value(&mut self, ch: char) -> Result<State, ErrorKind> {
        if ch == '\n' {
            self.commit()?;
            return Ok(State::LineStart);
        }
        self.value.push(ch);
        Ok(State::Value)
    }

    fn marker_key(&mut self, ch: char) -> Result<State, ErrorKind> {
        match ch {
            '%' if self.key.is_empty() => Ok(State::MarkerPercent),
            ':' if self.key.is_empty() => Err(ErrorKind::ColonAtLineStart),
            ':' => Ok(State::MultiValue {
                at_line_start: false,
            }),
            '\n' => Err(ErrorKind::MissingColonForKey),
            _ => {
                self.key.push(ch);
                Ok(State::MarkerKey)
            }
        }
    }

    fn marker_percent(&mut self, ch: char) -> Result<State, ErrorKind> {
        if ch == '%' {
            return Err(ErrorKind::DanglingMultilineMarker);
        }
        // Not at line start, so this `%` is plain key content.
        self.key.push('%');
        self.marker_key(ch)
    }

    fn multi_value(&mut self, at_line_start: bool, ch: char) -> State {
        match ch {
            '%' if at_line_start => State::MultiPercent,
            '\n' => {
                self.value.push(ch);
                State::MultiValue {
                    at_line_start: true,
                }
            }
            _ => {
                self.value.push(ch);
                State::MultiValue {
                    at_line_start: false,
                }
            }
        }
    }

    fn multi_percent(&mut self, ch: char) -> Result<State, ErrorKind> {
        if ch == '%' {
            self.commit()?;
            return Ok(State::AfterClose);
        }
        if self.lone_percent == LonePercent::Preserve {
            self.value.push('%');
        }
        Ok(self.multi_value(false, ch))
    }

    fn after_close(ch: char) -> Result<State, ErrorKind> {
        match ch {
            '\n' => Ok(State::LineStart),
            c if c.is_whitespace() => Ok(State::AfterClose),
            _ => Err(ErrorKind::TextAfterCloseMarker),
        }
    }

    /// Stores the pending pair in the current record and clears both buffers.
    fn commit(&mut self) -> Result<(), ErrorKind> {
        if self.key.is_empty() {
            return Err(ErrorKind::EmptyKey);
        }
        let key = std::mem::take(&mut self.key);
        let value = self.value.trim().to_string();
        self.value.clear();
        trace!("line {}: committed key {:?}", self.line, key);
        self.record.insert(key, value);
        Ok(())
    }

    /// Moves a non-empty record into the table.
    fn seal(&mut self) {
        if self.record.is_empty() {
            return;
        }
        let record = std::mem::take(&mut self.record);
        debug!(
            "line {}: sealed record {} with {} keys",
            self.line,
            self.table.len(),
            record.len()
        );
        self.table.push(record);
    }

    /// Commits a pending simple pair, seals the last record and returns the table.
    ///
    /// An unfinished key line or an unclosed multi-line value at end of input
    /// is dropped.
    fn finish(mut self) -> Result<Table, ParseError> {
        match self.state {
            State::Value => self
                .commit()
                .map_err(|kind| ParseError::new(kind, self.line))?,
            State::MarkerKey
            | State::MarkerPercent
            | State::MultiValue { .. }
            | State::MultiPercent => {
                debug!("line {}: dropped unclosed multi-line pair", self.line);
            }
            State::Percent | State::Key => {
                debug!("line {}: dropped unfinished key line", self.line);
            }
            State::LineStart | State::Comment | State::AfterClose => {}
        }
        self.seal();
        Ok(self.table)
    }
}

/// Parses a complete document held in a `&str`.
pub(crate) fn parse_str(input: &str, options: &TablerOptions) -> Result<Table, ParseError> {
    let mut scanner = Scanner::new(options.lone_percent);
    let table = scanner
        .feed_str(input)
        .and_then(|()| scanner.finish())
        .map_err(|err| {
            debug!("parse failed: {}", err);
            err
        })?;
    debug!("parsed {} records from {} bytes", table.len(), input.len());
    Ok(table)
}

/// Parses a complete document held in a byte buffer.
///
/// Bytes that are not valid UTF-8 are read as U+FFFD and otherwise treated
/// like any other content character.
pub(crate) fn parse_bytes(input: &[u8], options: &TablerOptions) -> Result<Table, ParseError> {
    parse_str(&String::from_utf8_lossy(input), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner_in(state: State) -> Scanner {
        let mut scanner = Scanner::new(LonePercent::Preserve);
        scanner.state = state;
        scanner
    }

    fn parse(input: &str) -> Result<Table, ParseError> {
        parse_str(input, &TablerOptions::new())
    }

    fn parse_legacy(input: &str) -> Result<Table, ParseError> {
        parse_str(input, &TablerOptions::legacy())
    }

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().copied().collect()
    }

    fn error_of(input: &str) -> (ErrorKind, usize) {
        let err = parse(input).unwrap_err();
        (err.kind(), err.line())
    }

    // Per-state transitions

    #[test]
    fn test_line_start_transitions() {
        assert_eq!(scanner_in(State::LineStart).transition('%'), Ok(State::Percent));
        assert_eq!(scanner_in(State::LineStart).transition('#'), Ok(State::Comment));
        assert_eq!(
            scanner_in(State::LineStart).transition(':'),
            Err(ErrorKind::ColonAtLineStart)
        );

        let mut scanner = scanner_in(State::LineStart);
        assert_eq!(scanner.transition('k'), Ok(State::Key));
        assert_eq!(scanner.key, "k");
    }

    #[test]
    fn test_blank_line_seals_only_non_empty_records() {
        let mut scanner = scanner_in(State::LineStart);
        assert_eq!(scanner.transition('\n'), Ok(State::LineStart));
        assert!(scanner.table.is_empty());

        scanner.record.insert("a", "b");
        assert_eq!(scanner.transition('\n'), Ok(State::LineStart));
        assert_eq!(scanner.table.len(), 1);
        assert!(scanner.record.is_empty());
    }

    #[test]
    fn test_percent_transitions() {
        assert_eq!(scanner_in(State::Percent).transition('%'), Ok(State::MarkerKey));

        let mut scanner = scanner_in(State::Percent);
        assert_eq!(scanner.transition('x'), Ok(State::Key));
        assert_eq!(scanner.key, "%x");

        let mut scanner = scanner_in(State::Percent);
        assert_eq!(scanner.transition(':'), Ok(State::Value));
        assert_eq!(scanner.key, "%");
    }

    #[test]
    fn test_percent_transitions_when_dropping() {
        let mut scanner = scanner_in(State::Percent);
        scanner.lone_percent = LonePercent::Drop;
        assert_eq!(scanner.transition('x'), Ok(State::Key));
        assert_eq!(scanner.key, "x");

        let mut scanner = scanner_in(State::Percent);
        scanner.lone_percent = LonePercent::Drop;
        assert_eq!(scanner.transition(':'), Err(ErrorKind::ColonAtLineStart));
    }

    #[test]
    fn test_comment_transitions() {
        let mut scanner = scanner_in(State::Comment);
        for ch in "a:%#".chars() {
            assert_eq!(scanner.transition(ch), Ok(State::Comment));
        }
        assert_eq!(scanner.transition('\n'), Ok(State::LineStart));
        assert!(scanner.key.is_empty());
    }

    #[test]
    fn test_key_transitions() {
        let mut scanner = scanner_in(State::Key);
        scanner.key.push('k');
        assert_eq!(scanner.transition('#'), Ok(State::Key));
        assert_eq!(scanner.transition(':'), Ok(State::Value));
        assert_eq!(scanner.key, "k#");

        let mut scanner = scanner_in(State::Key);
        scanner.key.push('k');
        assert_eq!(scanner.transition('\n'), Err(ErrorKind::NoKeyFound));
    }

    #[test]
    fn test_value_transitions() {
        let mut scanner = scanner_in(State::Value);
        scanner.key.push_str("url");
        for ch in " http://x ".chars() {
            assert_eq!(scanner.transition(ch), Ok(State::Value));
        }
        assert_eq!(scanner.transition('\n'), Ok(State::LineStart));
        assert_eq!(scanner.record.get("url"), Some("http://x"));
        assert!(scanner.key.is_empty());
        assert!(scanner.value.is_empty());
    }

    #[test]
    fn test_marker_key_transitions() {
        assert_eq!(
            scanner_in(State::MarkerKey).transition('%'),
            Ok(State::MarkerPercent)
        );
        assert_eq!(
            scanner_in(State::MarkerKey).transition(':'),
            Err(ErrorKind::ColonAtLineStart)
        );

        let mut scanner = scanner_in(State::MarkerKey);
        assert_eq!(scanner.transition('k'), Ok(State::MarkerKey));
        assert_eq!(scanner.transition('%'), Ok(State::MarkerKey));
        assert_eq!(scanner.key, "k%");
        assert_eq!(
            scanner.transition(':'),
            Ok(State::MultiValue {
                at_line_start: false
            })
        );

        let mut scanner = scanner_in(State::MarkerKey);
        scanner.key.push('k');
        assert_eq!(scanner.transition('\n'), Err(ErrorKind::MissingColonForKey));
    }

    #[test]
    fn test_marker_percent_transitions() {
        assert_eq!(
            scanner_in(State::MarkerPercent).transition('%'),
            Err(ErrorKind::DanglingMultilineMarker)
        );

        let mut scanner = scanner_in(State::MarkerPercent);
        scanner.lone_percent = LonePercent::Drop;
        assert_eq!(scanner.transition('k'), Ok(State::MarkerKey));
        assert_eq!(scanner.key, "%k");
    }

    #[test]
    fn test_multi_value_transitions() {
        let mut scanner = scanner_in(State::MultiValue {
            at_line_start: false,
        });
        assert_eq!(
            scanner.transition('%'),
            Ok(State::MultiValue {
                at_line_start: false
            })
        );
        assert_eq!(
            scanner.transition('\n'),
            Ok(State::MultiValue {
                at_line_start: true
            })
        );
        assert_eq!(scanner.transition('\n'), Ok(State::MultiValue { at_line_start: true }));
        scanner.state = State::MultiValue {
            at_line_start: true,
        };
        assert_eq!(scanner.transition('#'), Ok(State::MultiValue { at_line_start: false }));
        assert_eq!(scanner.transition(':'), Ok(State::MultiValue { at_line_start: false }));
        assert_eq!(scanner.value, "%\n\n#:");

        let mut scanner = scanner_in(State::MultiValue {
            at_line_start: true,
        });
        assert_eq!(scanner.transition('%'), Ok(State::MultiPercent));
    }

    #[test]
    fn test_multi_percent_transitions() {
        let mut scanner = scanner_in(State::MultiPercent);
        scanner.key.push('k');
        scanner.value.push_str("\n v \n");
        assert_eq!(scanner.transition('%'), Ok(State::AfterClose));
        assert_eq!(scanner.record.get("k"), Some("v"));

        let mut scanner = scanner_in(State::MultiPercent);
        assert_eq!(
            scanner.transition('\n'),
            Ok(State::MultiValue {
                at_line_start: true
            })
        );
        assert_eq!(scanner.value, "%\n");

        let mut scanner = scanner_in(State::MultiPercent);
        scanner.lone_percent = LonePercent::Drop;
        assert_eq!(
            scanner.transition('x'),
            Ok(State::MultiValue {
                at_line_start: false
            })
        );
        assert_eq!(scanner.value, "x");
    }

    #[test]
    fn test_after_close_transitions() {
        assert_eq!(Scanner::after_close(' '), Ok(State::AfterClose));
        assert_eq!(Scanner::after_close('\t'), Ok(State::AfterClose));
        assert_eq!(Scanner::after_close('\n'), Ok(State::LineStart));
        assert_eq!(
            Scanner::after_close('x'),
            Err(ErrorKind::TextAfterCloseMarker)
        );
    }

    #[test]
    fn test_commit_rejects_empty_key() {
        let mut scanner = scanner_in(State::Value);
        scanner.value.push_str("orphan");
        assert_eq!(scanner.commit(), Err(ErrorKind::EmptyKey));
        assert_eq!(scanner.transition('\n'), Err(ErrorKind::EmptyKey));
    }

    #[test]
    fn test_feed_counts_lines_after_success_only() {
        let mut scanner = Scanner::new(LonePercent::Preserve);
        scanner.feed_str("a:b\n# c\n\n").unwrap();
        assert_eq!(scanner.line, 4);

        let err = scanner.feed_str("k\n").unwrap_err();
        assert_eq!(err, ParseError::new(ErrorKind::NoKeyFound, 4));
    }

    // Whole documents

    #[test]
    fn test_blank_line_separates_records() {
        let table = parse("%%a:\nb\n%%\n\n%%c:\nd\n%%\n").unwrap();
        assert_eq!(
            table,
            Table::from(vec![record(&[("a", "b")]), record(&[("c", "d")])])
        );
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let table = parse("# comment\n%%a:\nb\n%%\n\n").unwrap();
        assert_eq!(table, Table::from(vec![record(&[("a", "b")])]));
    }

    #[test]
    fn test_two_pairs_in_one_record() {
        let table = parse("%%a:\n1\n%%\n%%b:\n2\n%%\n\n").unwrap();
        assert_eq!(table, Table::from(vec![record(&[("a", "1"), ("b", "2")])]));
    }

    #[test]
    fn test_simple_pairs_and_trimming() {
        let table = parse("name:  Alice \nurl: http://example.com:8080\n\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].get("name"), Some("Alice"));
        assert_eq!(table[0].get("url"), Some("http://example.com:8080"));
    }

    #[test]
    fn test_keys_are_not_trimmed() {
        let table = parse(" spaced key :v\n").unwrap();
        assert_eq!(table[0].get(" spaced key "), Some("v"));
    }

    #[test]
    fn test_multiline_value_keeps_inner_newlines() {
        let table = parse("%%k:\nline1\nline2\n%%\n\n").unwrap();
        assert_eq!(table[0].get("k"), Some("line1\nline2"));
    }

    #[test]
    fn test_multiline_value_content_is_verbatim() {
        let input = "%%body:\n# not a comment\n\nkey: value\n%inline\n%%\n";
        let table = parse(input).unwrap();
        assert_eq!(
            table[0].get("body"),
            Some("# not a comment\n\nkey: value\n%inline")
        );
    }

    #[test]
    fn test_value_on_marker_line() {
        let table = parse("%%k: first\nsecond\n%%\n").unwrap();
        assert_eq!(table[0].get("k"), Some("first\nsecond"));
    }

    #[test]
    fn test_empty_multiline_value() {
        let table = parse("%%k:\n%%\n").unwrap();
        assert_eq!(table[0].get("k"), Some(""));
    }

    #[test]
    fn test_repeated_key_last_write_wins() {
        let table = parse("k:1\nk:2\n").unwrap();
        assert_eq!(table[0].len(), 1);
        assert_eq!(table[0].get("k"), Some("2"));
    }

    #[test]
    fn test_extra_blank_lines_add_no_records() {
        let table = parse("\n\n\na:1\n\n\n\nb:2\n\n\n").unwrap();
        assert_eq!(
            table,
            Table::from(vec![record(&[("a", "1")]), record(&[("b", "2")])])
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_newline_after_close_is_not_a_blank_line() {
        let table = parse("%%a:\n1\n%%\nb:2\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].len(), 2);
    }

    #[test]
    fn test_trailing_whitespace_after_close() {
        let table = parse("%%a:\n1\n%%  \t\n").unwrap();
        assert_eq!(table[0].get("a"), Some("1"));
    }

    #[test]
    fn test_lone_percent_policy() {
        let input = "%off:50\n%%pct:\n%done\n%%\n";

        let table = parse(input).unwrap();
        assert_eq!(table[0].get("%off"), Some("50"));
        assert_eq!(table[0].get("pct"), Some("%done"));

        let table = parse_legacy(input).unwrap();
        assert_eq!(table[0].get("off"), Some("50"));
        assert_eq!(table[0].get("pct"), Some("done"));
    }

    #[test]
    fn test_percent_inside_lines_is_plain_content() {
        let table = parse("rate%:100%\n").unwrap();
        assert_eq!(table[0].get("rate%"), Some("100%"));
    }

    #[test]
    fn test_end_of_input_commits_pending_pair() {
        let table = parse("a:1\n\nb:2").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[1].get("b"), Some("2"));

        let table = parse("%%c:\nd\n%%").unwrap();
        assert_eq!(table[0].get("c"), Some("d"));
    }

    #[test]
    fn test_error_colon_at_line_start() {
        assert_eq!(error_of(":x\n"), (ErrorKind::ColonAtLineStart, 1));
        assert_eq!(error_of("a:1\n:x\n"), (ErrorKind::ColonAtLineStart, 2));
        assert_eq!(error_of("%%:\nv\n%%\n"), (ErrorKind::ColonAtLineStart, 1));
    }

    #[test]
    fn test_error_missing_colon_for_key() {
        assert_eq!(error_of("%%k\nv\n%%\n"), (ErrorKind::MissingColonForKey, 1));
        assert_eq!(error_of("a:1\n%%k\n"), (ErrorKind::MissingColonForKey, 2));
    }

    #[test]
    fn test_error_dangling_marker() {
        assert_eq!(
            error_of("a:1\n\n%%%%k:\nv\n%%\n"),
            (ErrorKind::DanglingMultilineMarker, 3)
        );
    }

    #[test]
    fn test_error_no_key_found() {
        assert_eq!(error_of("a:1\njunk\n"), (ErrorKind::NoKeyFound, 2));
        assert_eq!(error_of("   \n"), (ErrorKind::NoKeyFound, 1));
        assert_eq!(error_of("%\n"), (ErrorKind::NoKeyFound, 1));
    }

    #[test]
    fn test_error_text_after_close() {
        assert_eq!(
            error_of("%%k:\nv\n%%junk\n"),
            (ErrorKind::TextAfterCloseMarker, 3)
        );
    }

    #[test]
    fn test_end_of_input_drops_unfinished_line() {
        let expected = Table::from(vec![record(&[("a", "1")])]);
        assert_eq!(parse("a:1\ntrailing").unwrap(), expected);
        assert_eq!(parse("a:1\n%").unwrap(), expected);
        assert_eq!(parse_legacy("a:1\n%").unwrap(), expected);
        assert_eq!(parse("a:1\n%%k").unwrap(), expected);
        assert_eq!(parse("a:1\n%%%").unwrap(), expected);
        assert_eq!(parse("a:1\n\n%%k:\nv\n").unwrap(), expected);
        assert_eq!(parse("a:1\n\n%%k:\nv\n%").unwrap(), expected);
    }

    #[test]
    fn test_end_of_input_keeps_unclosed_value_out_of_open_record() {
        let table = parse("a:1\n%%k:\nv\n\nmore\n").unwrap();
        assert_eq!(table, Table::from(vec![record(&[("a", "1")])]));
    }

    #[test]
    fn test_lines_inside_values_and_comments_are_counted() {
        assert_eq!(
            error_of("# c\n%%k:\n1\n2\n%%\n\nbad\n"),
            (ErrorKind::NoKeyFound, 7)
        );
    }

    #[test]
    fn test_invalid_utf8_in_comment_is_discarded() {
        let table = parse_bytes(b"# caf\xe9\nk:v\n", &TablerOptions::new()).unwrap();
        assert_eq!(table, Table::from(vec![record(&[("k", "v")])]));
    }

    #[test]
    fn test_invalid_utf8_reads_as_replacement_character() {
        let table = parse_bytes(b"a:\xff\n", &TablerOptions::new()).unwrap();
        assert_eq!(table[0].get("a"), Some("\u{FFFD}"));

        let err = parse_bytes(b"a:1\n\xff\n", &TablerOptions::new()).unwrap_err();
        assert_eq!(err, ParseError::new(ErrorKind::NoKeyFound, 2));
    }

    #[test]
    fn test_parse_bytes_matches_parse_str() {
        let input = "x:1\n%%y:\n2\n%%\n\nz:3\n";
        assert_eq!(
            parse_bytes(input.as_bytes(), &TablerOptions::new()).unwrap(),
            parse(input).unwrap()
        );
    }
}
