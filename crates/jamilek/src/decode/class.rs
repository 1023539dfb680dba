//! Single code point predicates used for one-character lookahead.

use unicode_general_category::{GeneralCategory, get_general_category};

#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_underscore(c: char) -> bool {
    c == '_'
}

#[inline]
pub fn is_key_char(c: char) -> bool {
    is_letter(c) || is_digit(c) || is_underscore(c)
}

#[inline]
pub fn is_colon(c: char) -> bool {
    c == ':'
}

#[inline]
pub fn is_space(c: char) -> bool {
    c == ' '
}

#[inline]
pub fn is_newline(c: char) -> bool {
    c == '\n'
}

#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"'
}

/// Starts `true`.
#[inline]
pub fn is_t(c: char) -> bool {
    c == 't'
}

/// Starts `false`.
#[inline]
pub fn is_f(c: char) -> bool {
    c == 'f'
}

#[inline]
pub fn is_backslash(c: char) -> bool {
    c == '\\'
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

#[inline]
pub fn is_minus(c: char) -> bool {
    c == '-'
}

#[inline]
pub fn is_zero(c: char) -> bool {
    c == '0'
}

#[inline]
pub fn is_positive_digit(c: char) -> bool {
    matches!(c, '1'..='9')
}

#[inline]
pub fn is_dot(c: char) -> bool {
    c == '.'
}

#[inline]
pub fn is_exponent(c: char) -> bool {
    c == 'E'
}

#[inline]
pub fn is_array_start(c: char) -> bool {
    c == '['
}

#[inline]
pub fn is_array_end(c: char) -> bool {
    c == ']'
}

#[inline]
pub fn is_object_start(c: char) -> bool {
    c == '{'
}

#[inline]
pub fn is_object_end(c: char) -> bool {
    c == '}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_chars() {
        assert!(is_colon(':'));
        assert!(is_space(' '));
        assert!(is_newline('\n'));
        assert!(is_quote('"'));
        assert!(is_t('t'));
        assert!(is_f('f'));
        assert!(is_backslash('\\'));
        assert!(is_minus('-'));
        assert!(is_zero('0'));
        assert!(is_dot('.'));
        assert!(is_exponent('E'));
        assert!(!is_exponent('e'));
        assert!(is_array_start('[') && is_array_end(']'));
        assert!(is_object_start('{') && is_object_end('}'));
    }

    #[test]
    fn digits() {
        for d in '0'..='9' {
            assert!(is_digit(d), "{d}");
        }
        for c in ['d', 'b', '#', '\n', '\\', '!', 'h', '٣'] {
            assert!(!is_digit(c), "{c:?}");
        }
        assert!(!is_positive_digit('0'));
        assert!(('1'..='9').all(is_positive_digit));
    }

    #[test]
    fn key_chars() {
        for c in ['a', 'Z', '0', '9', '_'] {
            assert!(is_key_char(c), "{c}");
        }
        for c in ['-', ' ', ':', 'é', '.'] {
            assert!(!is_key_char(c), "{c:?}");
        }
    }

    #[test]
    fn printable() {
        for c in ['a', ' ', '"', '\\', 'é', '€', '😀', '中'] {
            assert!(is_printable(c), "{c:?}");
        }
        for c in ['\n', '\t', '\u{7f}', '\u{a0}', '\u{200b}', '\u{2028}', '\u{e000}'] {
            assert!(!is_printable(c), "{c:?}");
        }
    }
}
