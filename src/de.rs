//! Record literal parsing.
//!
//! This module provides the [`Parser`] that reads record text back into a
//! [`RecordMap`]. It accepts exactly what the [`Serializer`](crate::Serializer)
//! writes, plus arbitrary whitespace between tokens.
//!
//! ## Usage
//!
//! ```rust
//! use docrecord::from_str;
//!
//! let rec = from_str(r#"{ name = """f""", definition = """Int -> Int""", explanation = """""" }"#).unwrap();
//! assert_eq!(rec.get_str("definition"), Some("Int -> Int"));
//! assert_eq!(rec.get_str("explanation"), Some(""));
//! ```
//!
//! Raw strings end at the first `"""`. Text written with
//! [`DelimiterPolicy::Escape`] has to be read with the same policy:
//!
//! ```rust
//! use docrecord::{from_str_with_options, DelimiterPolicy, RecordOptions};
//!
//! let options = RecordOptions::new().with_delimiters(DelimiterPolicy::Escape);
//! let rec = from_str_with_options(r#"{ name = """a \"\"\" b""" }"#, &options).unwrap();
//! assert_eq!(rec.get_str("name"), Some(r#"a """ b"#));
//! ```

use crate::{DelimiterPolicy, Error, RecordMap, RecordOptions, RecordValue, Result};

/// The record text parser.
///
/// Single pass, no backtracking. Tracks line and column for error messages.
pub struct Parser<'de> {
    input: &'de str,
    position: usize,
    line: usize,
    column: usize,
    escapes: bool,
}

impl<'de> Parser<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            escapes: false,
        }
    }

    /// Uses the delimiter policy of `options` to decide whether backslash
    /// escapes are recognised.
    #[must_use]
    pub fn with_options(mut self, options: &RecordOptions) -> Self {
        self.escapes = options.delimiters == DelimiterPolicy::Escape;
        self
    }

    /// Parses one record and requires the rest of the input to be whitespace.
    pub fn parse(&mut self) -> Result<RecordMap> {
        self.skip_whitespace();
        let record = self.parse_record()?;
        self.skip_whitespace();

        if !self.at_end() {
            return Err(self.syntax_error("trailing characters after record"));
        }
        Ok(record)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn starts_with(&self, s: &str) -> bool {
        self.input[self.position..].starts_with(s)
    }

    fn advance_by(&mut self, s: &str) {
        for _ in s.chars() {
            self.next_char();
        }
    }

    fn current_line(&self) -> &'de str {
        self.input.lines().nth(self.line - 1).unwrap_or("")
    }

    fn syntax_error(&self, msg: &str) -> Error {
        Error::syntax(self.line, self.column, msg, self.current_line())
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek_char() {
            Some(ch) if ch == expected => {
                self.next_char();
                Ok(())
            }
            Some(ch) => Err(self.syntax_error(&format!("expected '{}', found '{}'", expected, ch))),
            None => Err(Error::unexpected_eof(
                self.line,
                self.column,
                &format!("'{}'", expected),
            )),
        }
    }

    fn parse_record(&mut self) -> Result<RecordMap> {
        self.expect('{')?;
        let mut record = RecordMap::new();

        self.skip_whitespace();
        if self.peek_char() == Some('}') {
            self.next_char();
            return Ok(record);
        }

        loop {
            self.skip_whitespace();
            let key = self.parse_identifier()?;
            self.skip_whitespace();
            self.expect('=')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            record.insert(key, value);
            self.skip_whitespace();

            match self.next_char() {
                Some(',') => continue,
                Some('}') => return Ok(record),
                Some(ch) => {
                    return Err(self.syntax_error(&format!("expected ',' or '}}', found '{}'", ch)))
                }
                None => return Err(Error::unexpected_eof(self.line, self.column, "',' or '}'")),
            }
        }
    }

    fn parse_identifier(&mut self) -> Result<String> {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                self.next_char();
            } else {
                break;
            }
        }

        if start == self.position {
            return match self.peek_char() {
                Some(ch) => Err(self.syntax_error(&format!("expected field name, found '{}'", ch))),
                None => Err(Error::unexpected_eof(self.line, self.column, "field name")),
            };
        }
        Ok(self.input[start..self.position].to_string())
    }

    fn parse_value(&mut self) -> Result<RecordValue> {
        if self.starts_with("\"\"\"") {
            self.advance_by("\"\"\"");
            return self.parse_raw().map(RecordValue::Raw);
        }

        match self.peek_char() {
            Some('"') => {
                self.next_char();
                self.parse_quoted().map(RecordValue::Quoted)
            }
            Some('[') => self.parse_list().map(RecordValue::List),
            Some(ch) => Err(self.syntax_error(&format!("expected a string or list, found '{}'", ch))),
            None => Err(Error::unexpected_eof(self.line, self.column, "value")),
        }
    }

    fn parse_raw(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            if self.starts_with("\"\"\"") {
                self.advance_by("\"\"\"");
                return Ok(text);
            }
            match self.next_char() {
                Some('\\') if self.escapes => text.push(self.parse_escape()?),
                Some(ch) => text.push(ch),
                None => return Err(Error::unexpected_eof(self.line, self.column, "'\"\"\"'")),
            }
        }
    }

    fn parse_quoted(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_char() {
                Some('"') => return Ok(text),
                Some('\\') if self.escapes => text.push(self.parse_escape()?),
                Some(ch) => text.push(ch),
                None => return Err(Error::unexpected_eof(self.line, self.column, "'\"'")),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        match self.next_char() {
            Some(ch @ ('"' | '\\')) => Ok(ch),
            Some(ch) => Err(self.syntax_error(&format!("invalid escape '\\{}'", ch))),
            None => Err(Error::unexpected_eof(self.line, self.column, "escaped character")),
        }
    }

    fn parse_list(&mut self) -> Result<Vec<RecordMap>> {
        self.expect('[')?;
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek_char() == Some(']') {
            self.next_char();
            return Ok(items);
        }

        loop {
            self.skip_whitespace();
            items.push(self.parse_record()?);
            self.skip_whitespace();

            match self.next_char() {
                Some(',') => continue,
                Some(']') => return Ok(items),
                Some(ch) => {
                    return Err(self.syntax_error(&format!("expected ',' or ']', found '{}'", ch)))
                }
                None => return Err(Error::unexpected_eof(self.line, self.column, "',' or ']'")),
            }
        }
    }
}
