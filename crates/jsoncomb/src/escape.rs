//! Decoding and encoding of JSON string escapes.
//!
//! The grammar decodes escapes one character or one `\uXXXX` code unit at a
//! time; [`write_escaped_string`] is the inverse used when rendering a
//! [`Value`](crate::Value).
use crate::list::List;

const HIGH_SURROGATES: core::ops::Range<u32> = 0xD800..0xDC00;
const LOW_SURROGATES: core::ops::Range<u32> = 0xDC00..0xE000;

/// The character a single-character escape such as `\n` stands for.
pub(crate) fn unescape_char(c: char) -> Option<char> {
    Some(match c {
        '"' => '"',
        '\\' => '\\',
        '/' => '/',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        _ => return None,
    })
}

/// Folds hexadecimal digits into a UTF-16 code unit.
pub(crate) fn decode_code_unit(digits: &List<char>) -> Option<u32> {
    digits
        .iter()
        .try_fold(0u32, |code, c| Some((code << 4) | c.to_digit(16)?))
        .filter(|code| *code <= 0xFFFF)
}

pub(crate) fn is_high_surrogate(code: u32) -> bool {
    HIGH_SURROGATES.contains(&code)
}

/// A code unit that stands for a character on its own. Surrogates don't.
pub(crate) fn scalar_from_code_unit(code: u32) -> Option<char> {
    char::from_u32(code)
}

/// Combines a surrogate pair into the character it encodes.
pub(crate) fn combine_surrogates(high: u32, low: u32) -> Option<char> {
    if !is_high_surrogate(high) || !LOW_SURROGATES.contains(&low) {
        return None;
    }
    char::from_u32(0x1_0000 + ((high - HIGH_SURROGATES.start) << 10) + (low - LOW_SURROGATES.start))
}

/// Writes `src` as the body of a JSON string literal. Quotes and backslashes
/// get a backslash; control characters and the two Unicode line separators
/// become `\uXXXX`.
pub(crate) fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{2028}' | '\u{2029}' => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            // Control characters are all in the BMP.
            c if c.is_control() => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}
