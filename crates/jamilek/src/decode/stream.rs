use std::fmt;
use std::io::{self, BufRead, ErrorKind};
use std::str::Chars;

use crate::decode::class::is_printable;

/// Anything that can hand out code points one at a time.
///
/// `Ok(None)` is a clean end of input; `Err` is a read failure and is propagated
/// to the caller of the parser untouched.
pub trait Source {
    fn read_char(&mut self) -> io::Result<Option<char>>;
}

impl<S: Source + ?Sized> Source for &mut S {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

/// Source over an in-memory string.
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
        }
    }
}

impl Source for StrSource<'_> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// Source decoding UTF-8 from a buffered byte reader, one code point per call.
pub struct Utf8Reader<R> {
    inner: R,
}

impl<R: BufRead> Utf8Reader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let buf = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let Some(&b) = buf.first() else {
                return Ok(None);
            };
            self.inner.consume(1);
            return Ok(Some(b));
        }
    }
}

#[inline]
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}

fn invalid_utf8(message: &str) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, message.to_string())
}

impl<R: BufRead> Source for Utf8Reader<R> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(lead);
        if width == 0 {
            return Err(invalid_utf8("invalid UTF-8 lead byte"));
        }
        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self
                .read_byte()?
                .ok_or_else(|| invalid_utf8("truncated UTF-8 sequence"))?;
        }
        let s = std::str::from_utf8(&buf[..width])
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
        Ok(s.chars().next())
    }
}

/// A code point together with the zero-based position it was read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Char {
    pub value: char,
    pub row: usize,
    pub column: usize,
}

impl Char {
    pub fn new(value: char, row: usize, column: usize) -> Self {
        Self { value, row, column }
    }

    /// Display form without the position: `'a'(0x61)` or `<non-print>(0xa)`.
    pub fn glyph(&self) -> Glyph {
        Glyph(self.value)
    }
}

impl fmt::Display for Char {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.glyph(), self.row, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(pub char);

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.0 as u32;
        if is_printable(self.0) {
            write!(f, "'{}'(0x{:x})", self.0, code)
        } else {
            write!(f, "<non-print>(0x{:x})", code)
        }
    }
}

/// Position-tracking reader over a [`Source`].
///
/// Every character gets the position current at the time it is read. Reading a
/// newline then moves to column 0 of the next row, so a newline's own column is
/// the one it occupied at the end of its line.
pub struct CharStream<S> {
    source: S,
    row: usize,
    column: usize,
}

impl<S: Source> CharStream<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            row: 0,
            column: 0,
        }
    }

    pub fn read(&mut self) -> io::Result<Option<Char>> {
        let Some(value) = self.source.read_char()? else {
            return Ok(None);
        };
        let ch = Char::new(value, self.row, self.column);
        self.column += 1;
        if value == '\n' {
            self.column = 0;
            self.row += 1;
        }
        Ok(Some(ch))
    }

    /// Position the next character will be reported at.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}
