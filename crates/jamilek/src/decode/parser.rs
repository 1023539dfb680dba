use log::{debug, trace};

use crate::decode::class;
use crate::decode::escape::decode_escape;
use crate::decode::stream::{Char, CharStream, Source};
use crate::error::{Error, Result};
use crate::node::Node;
use crate::options::Options;

/// Recursive-descent parser over a single pass of a [`Source`].
///
/// Every branch commits after one character; nothing is ever pushed back.
/// `level` is threaded through the container routines and only decides how
/// many spaces of indentation a content line needs.
pub struct Parser<S> {
    stream: CharStream<S>,
    max_depth: Option<usize>,
}

impl<S: Source> Parser<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, &Options::default())
    }

    pub fn with_options(source: S, options: &Options) -> Self {
        Self {
            stream: CharStream::new(source),
            max_depth: options.max_depth,
        }
    }

    /// Parse the root object: `key:value` lines until the source is exhausted.
    pub fn parse_document(mut self) -> Result<Node> {
        match self.parse_root() {
            Ok(entries) => {
                debug!("parsed document with {} root keys", entries.len());
                Ok(Node::Object(entries))
            }
            Err(e) => {
                debug!("parse aborted: {e}");
                Err(e)
            }
        }
    }

    fn parse_root(&mut self) -> Result<Vec<(String, Node)>> {
        let mut entries: Vec<(String, Node)> = Vec::new();
        // End of input is only acceptable where a new root key would start.
        while let Some(first) = self.stream.read()? {
            let key = self.parse_key_from(first)?;
            check_order(entries.last().map(|(k, _)| k.as_str()), &key, first)?;
            let value = self.parse_value(0)?;
            entries.push((key, value));
        }
        Ok(entries)
    }

    fn next(&mut self) -> Result<Char> {
        match self.stream.read()? {
            Some(ch) => Ok(ch),
            None => {
                let (row, column) = self.stream.position();
                Err(Error::UnexpectedEof { row, column })
            }
        }
    }

    fn expect_space(&mut self) -> Result<()> {
        let ch = self.next()?;
        if class::is_space(ch.value) {
            Ok(())
        } else {
            Err(Error::syntax(ch, "expected space"))
        }
    }

    fn expect_newline(&mut self) -> Result<()> {
        let ch = self.next()?;
        if class::is_newline(ch.value) {
            Ok(())
        } else {
            Err(Error::syntax(ch, "expected newline"))
        }
    }

    fn parse_key(&mut self) -> Result<(Char, String)> {
        let first = self.next()?;
        let key = self.parse_key_from(first)?;
        Ok((first, key))
    }

    /// Key characters up to and including the colon; the colon is not part of the key.
    fn parse_key_from(&mut self, first: Char) -> Result<String> {
        let mut key = String::new();
        let mut ch = first;
        loop {
            if class::is_key_char(ch.value) {
                key.push(ch.value);
            } else if class::is_colon(ch.value) {
                if key.is_empty() {
                    return Err(Error::syntax(ch, "empty key"));
                }
                return Ok(key);
            } else {
                return Err(Error::syntax(ch, "invalid key character"));
            }
            ch = self.next()?;
        }
    }

    fn parse_value(&mut self, level: usize) -> Result<Node> {
        let ch = self.next()?;
        let c = ch.value;
        if class::is_quote(c) {
            self.parse_string()
        } else if class::is_t(c) {
            self.parse_literal("rue", true)
        } else if class::is_f(c) {
            self.parse_literal("alse", false)
        } else if class::is_minus(c) || class::is_digit(c) {
            self.parse_number(ch)
        } else if class::is_array_start(c) {
            self.check_depth(level, ch)?;
            self.parse_array(level)
        } else if class::is_object_start(c) {
            self.check_depth(level, ch)?;
            self.parse_object(level)
        } else {
            Err(Error::syntax(ch, "invalid value"))
        }
    }

    fn check_depth(&self, level: usize, open: Char) -> Result<()> {
        match self.max_depth {
            Some(max) if level >= max => Err(Error::syntax(
                open,
                format!("nesting depth exceeds limit of {max}"),
            )),
            _ => Ok(()),
        }
    }

    fn parse_string(&mut self) -> Result<Node> {
        let mut out = String::new();
        loop {
            let ch = self.next()?;
            if !class::is_printable(ch.value) && !class::is_space(ch.value) {
                return Err(Error::syntax(ch, "invalid character in string"));
            }
            if class::is_quote(ch.value) {
                self.expect_newline()?;
                return Ok(Node::String(out));
            }
            if class::is_backslash(ch.value) {
                let escaped = self.next()?;
                out.push(decode_escape(escaped)?);
            } else {
                out.push(ch.value);
            }
        }
    }

    /// Remainder of `true` / `false` after its first letter, then the newline.
    fn parse_literal(&mut self, rest: &str, value: bool) -> Result<Node> {
        for expected in rest.chars() {
            let ch = self.next()?;
            if ch.value != expected {
                let word = if value { "true" } else { "false" };
                return Err(Error::syntax(
                    ch,
                    format!("invalid character while parsing '{word}'"),
                ));
            }
        }
        self.expect_newline()?;
        Ok(Node::Bool(value))
    }

    fn parse_number(&mut self, first: Char) -> Result<Node> {
        if class::is_zero(first.value) {
            self.parse_zero()
        } else if class::is_minus(first.value) {
            let digit = self.read_positive_digit()?;
            let mut text = String::from("-");
            text.push(digit.value);
            self.parse_after_first_digit(text)
        } else {
            self.parse_after_first_digit(first.value.to_string())
        }
    }

    /// A leading `0` is either the integer `0` or the float `0.0`.
    fn parse_zero(&mut self) -> Result<Node> {
        let ch = self.next()?;
        if class::is_newline(ch.value) {
            return Ok(Node::Integer("0".to_string()));
        }
        if !class::is_dot(ch.value) {
            return Err(Error::syntax(ch, "invalid number"));
        }
        let ch = self.next()?;
        if !class::is_zero(ch.value) {
            return Err(Error::syntax(ch, "expecting 0"));
        }
        self.expect_newline()?;
        Ok(Node::Float("0.0".to_string()))
    }

    /// `text` holds an optional minus and one non-zero digit.
    fn parse_after_first_digit(&mut self, mut text: String) -> Result<Node> {
        let ch = self.next()?;
        if class::is_newline(ch.value) {
            return Ok(Node::Integer(text));
        }
        if class::is_digit(ch.value) {
            text.push(ch.value);
            return self.parse_integer_digits(text);
        }
        if class::is_dot(ch.value) {
            return self.parse_fraction(text);
        }
        Err(Error::syntax(ch, "expected digit or dot"))
    }

    fn parse_integer_digits(&mut self, mut text: String) -> Result<Node> {
        loop {
            let ch = self.next()?;
            if class::is_newline(ch.value) {
                return Ok(Node::Integer(text));
            }
            if !class::is_digit(ch.value) {
                return Err(Error::syntax(ch, "invalid int character"));
            }
            text.push(ch.value);
        }
    }

    fn parse_fraction(&mut self, mut text: String) -> Result<Node> {
        text.push('.');
        let first = self.read_digit()?;
        text.push(first.value);
        let mut last = first.value;
        loop {
            let ch = self.next()?;
            let terminates = class::is_newline(ch.value) || class::is_exponent(ch.value);
            if terminates && class::is_zero(last) {
                return Err(Error::syntax(ch, "invalid float: trailing zero in fraction"));
            }
            if class::is_newline(ch.value) {
                return Ok(Node::Float(text));
            }
            if class::is_exponent(ch.value) {
                return self.parse_exponent(text);
            }
            if !class::is_digit(ch.value) {
                return Err(Error::syntax(ch, "expecting digit"));
            }
            text.push(ch.value);
            last = ch.value;
        }
    }

    fn parse_exponent(&mut self, mut text: String) -> Result<Node> {
        text.push('E');
        let ch = self.next()?;
        if class::is_minus(ch.value) {
            text.push('-');
            let digit = self.read_positive_digit()?;
            text.push(digit.value);
        } else if class::is_positive_digit(ch.value) {
            text.push(ch.value);
        } else {
            return Err(Error::syntax(ch, "invalid exponent"));
        }
        loop {
            let ch = self.next()?;
            if class::is_newline(ch.value) {
                return Ok(Node::Float(text));
            }
            if !class::is_digit(ch.value) {
                return Err(Error::syntax(ch, "invalid exponent digit"));
            }
            text.push(ch.value);
        }
    }

    fn read_digit(&mut self) -> Result<Char> {
        let ch = self.next()?;
        if class::is_digit(ch.value) {
            Ok(ch)
        } else {
            Err(Error::syntax(ch, "expecting digit"))
        }
    }

    fn read_positive_digit(&mut self) -> Result<Char> {
        let ch = self.read_digit()?;
        if class::is_positive_digit(ch.value) {
            Ok(ch)
        } else {
            Err(Error::syntax(ch, "expecting positive digit"))
        }
    }

    /// Indentation of one content line of a container opened at `level`.
    ///
    /// Returns `true` when the line holds the closing delimiter (`2*level` spaces,
    /// then `end`); otherwise the line continues with one more space pair and
    /// content follows.
    fn parse_indent(&mut self, level: usize, end: fn(char) -> bool) -> Result<bool> {
        for _ in 0..level {
            self.expect_space()?;
            self.expect_space()?;
        }
        let ch = self.next()?;
        if end(ch.value) {
            return Ok(true);
        }
        if class::is_space(ch.value) {
            self.expect_space()?;
            return Ok(false);
        }
        Err(Error::syntax(ch, "invalid indentation"))
    }

    fn parse_array(&mut self, level: usize) -> Result<Node> {
        trace!("array open at level {level}");
        self.expect_newline()?;
        let mut items = Vec::new();
        while !self.parse_indent(level, class::is_array_end)? {
            items.push(self.parse_value(level + 1)?);
        }
        self.expect_newline()?;
        trace!("array close at level {level} with {} items", items.len());
        Ok(Node::Array(items))
    }

    fn parse_object(&mut self, level: usize) -> Result<Node> {
        trace!("object open at level {level}");
        self.expect_newline()?;
        let mut entries: Vec<(String, Node)> = Vec::new();
        while !self.parse_indent(level, class::is_object_end)? {
            let (first, key) = self.parse_key()?;
            check_order(entries.last().map(|(k, _)| k.as_str()), &key, first)?;
            self.expect_space()?;
            let value = self.parse_value(level + 1)?;
            entries.push((key, value));
        }
        self.expect_newline()?;
        trace!("object close at level {level} with {} keys", entries.len());
        Ok(Node::Object(entries))
    }
}

fn check_order(previous: Option<&str>, key: &str, at: Char) -> Result<()> {
    match previous {
        Some(prev) if key <= prev => Err(Error::Ordering {
            found: at,
            key: key.to_string(),
            previous: prev.to_string(),
        }),
        _ => Ok(()),
    }
}
