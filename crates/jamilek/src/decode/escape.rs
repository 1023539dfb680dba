use crate::decode::stream::Char;
use crate::error::{Error, Result};

/// Resolve the character following a backslash inside a string.
pub fn decode_escape(ch: Char) -> Result<char> {
    match ch.value {
        'n' => Ok('\n'),
        '\\' => Ok('\\'),
        't' => Ok('\t'),
        _ => Err(Error::Escape { found: ch }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn known_escapes() {
        assert_eq!(decode_escape(Char::new('n', 0, 0)).unwrap(), '\n');
        assert_eq!(decode_escape(Char::new('\\', 0, 0)).unwrap(), '\\');
        assert_eq!(decode_escape(Char::new('t', 0, 0)).unwrap(), '\t');
    }

    #[test]
    fn unknown_escape_keeps_position() {
        for c in ['q', '"', 'u', 'r', '\n'] {
            let err = decode_escape(Char::new(c, 2, 7)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Escape);
            assert_eq!(err.position(), Some((2, 7)));
        }
    }
}
