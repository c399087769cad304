//! The JSON grammar, assembled from the crate's parser combinators.
//!
//! # Examples
//!
//! ```rust
//! use jsoncomb::{parse_value, Value};
//!
//! let (rest, value) = parse_value(r#"[true, "yay", 12] tail"#).unwrap();
//! assert_eq!(rest, "tail");
//! assert_eq!(value.to_string(), r#"[true,"yay",12]"#);
//!
//! assert_eq!(parse_value(r#""unterminated"#), None);
//! ```
use alloc::string::{String, ToString};

use crate::{
    error::ParseError,
    escape,
    list::List,
    options::{ParserOptions, StringEscapes},
    pair,
    parser::{
        Parser, choice, count, empty, end_of_input, lazy, literal_element, literal_sequence, many,
        optional, pure, satisfy, sep_by, some,
    },
    value::Value,
};

/// Parses one JSON value, with surrounding whitespace, from the start of
/// `text`, using the default options. Returns the unconsumed input with the
/// value.
///
/// Anything after the value is left for the caller; use [`parse_document`]
/// to reject it.
#[must_use]
pub fn parse_value(text: &str) -> Option<(&str, Value)> {
    JsonParser::default().parse_value(text)
}

/// Parses `text` as exactly one JSON value, using the default options.
///
/// # Errors
///
/// [`ParseError::NoValue`] if `text` does not start with a value,
/// [`ParseError::TrailingInput`] if anything but whitespace follows it.
pub fn parse_document(text: &str) -> Result<Value, ParseError> {
    JsonParser::default().parse_document(text)
}

/// A JSON grammar configured by [`ParserOptions`].
///
/// # Examples
///
/// ```rust
/// use jsoncomb::{JsonParser, ParseError, ParserOptions};
///
/// let parser = JsonParser::new(ParserOptions {
///     max_depth: 2,
///     ..Default::default()
/// });
/// assert!(parser.parse_document("[[1]]").is_ok());
/// assert_eq!(parser.parse_document("[[[1]]]"), Err(ParseError::NoValue));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser {
    options: ParserOptions,
}

impl JsonParser {
    /// Builds a grammar with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this grammar was built with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The parser for one JSON value, including surrounding whitespace.
    pub fn value<'a>(&self) -> Parser<'a, Value> {
        json_value(self.options, 0)
    }

    /// Parses one JSON value from the start of `text`, returning the
    /// unconsumed input with the value.
    #[must_use]
    pub fn parse_value<'a>(&self, text: &'a str) -> Option<(&'a str, Value)> {
        tracing::trace!(len = text.len(), "parsing JSON value");
        let parsed = self.value().parse_str(text);
        if parsed.is_none() {
            tracing::debug!(len = text.len(), "no JSON value at start of input");
        }
        parsed
    }

    /// Parses `text` as exactly one JSON value.
    ///
    /// # Errors
    ///
    /// [`ParseError::NoValue`] if `text` does not start with a value,
    /// [`ParseError::TrailingInput`] if anything but whitespace follows it.
    pub fn parse_document(&self, text: &str) -> Result<Value, ParseError> {
        let (rest, value) = self.parse_value(text).ok_or(ParseError::NoValue)?;
        if end_of_input().parse_str(rest).is_none() {
            tracing::debug!(
                consumed = text.len() - rest.len(),
                remaining = rest.len(),
                "trailing input after JSON value"
            );
            return Err(ParseError::TrailingInput);
        }
        Ok(value)
    }
}

fn whitespace<'a>(options: ParserOptions) -> Parser<'a, List<char>> {
    many(satisfy(move |c| options.is_whitespace(c)))
}

fn json_value<'a>(options: ParserOptions, depth: usize) -> Parser<'a, Value> {
    let alternatives: List<Parser<'a, Value>> = [
        null(),
        boolean(),
        number(),
        string(options).map(Value::String),
        array(options, depth),
        object(options, depth),
    ]
    .into_iter()
    .collect();

    whitespace(options)
        .then_right(choice(alternatives))
        .then_left(whitespace(options))
}

fn null<'a>() -> Parser<'a, Value> {
    literal_sequence("null").map(|_| Value::Null)
}

fn boolean<'a>() -> Parser<'a, Value> {
    let t = literal_sequence("true").map(|_| Value::Boolean(true));
    let f = literal_sequence("false").map(|_| Value::Boolean(false));
    t.or_else(f)
}

fn digits<'a>() -> Parser<'a, List<char>> {
    some(satisfy(|c| c.is_ascii_digit()))
}

/// `-`? digit+ (`.` digit+)? ([eE] [+-]? digit+)?, converted once the whole
/// lexeme is known. Values that overflow `f64` are rejected.
fn number<'a>() -> Parser<'a, Value> {
    let sign = optional(literal_element('-'));
    let fraction = optional(literal_element('.').then_right(digits()));
    let exponent = optional(
        satisfy(|c| matches!(c, 'e' | 'E'))
            .then_right(optional(satisfy(|c| matches!(c, '+' | '-'))))
            .then_right(digits()),
    );

    sign.then_right(digits())
        .then_left(fraction)
        .then_left(exponent)
        .recognize()
        .filter_map(|lexeme| {
            lexeme
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Value::Number)
        })
}

fn string<'a>(options: ParserOptions) -> Parser<'a, String> {
    let body = match options.string_escapes {
        StringEscapes::Json => many(json_char()),
        StringEscapes::Literal => many(satisfy(|c| c != '"')),
    };
    literal_element('"')
        .then_right(body)
        .then_left(literal_element('"'))
        .map(|chars| chars.to_string())
}

fn json_char<'a>() -> Parser<'a, char> {
    let unescaped = satisfy(|c| c != '"' && c != '\\' && c >= ' ');
    let escaped = literal_element('\\').then_right(
        satisfy(|_| true)
            .filter_map(escape::unescape_char)
            .or_else(unicode_escape()),
    );
    unescaped.or_else(escaped)
}

fn code_unit<'a>() -> Parser<'a, u32> {
    literal_element('u')
        .then_right(count(4, satisfy(|c| c.is_ascii_hexdigit())))
        .filter_map(|digits| escape::decode_code_unit(&digits))
}

/// `uXXXX`, or a high surrogate followed by `\uXXXX` holding the low half.
fn unicode_escape<'a>() -> Parser<'a, char> {
    code_unit().and_then(|high| {
        if escape::is_high_surrogate(high) {
            literal_element('\\')
                .then_right(code_unit())
                .filter_map(move |low| escape::combine_surrogates(high, low))
        } else {
            match escape::scalar_from_code_unit(high) {
                Some(c) => pure(c),
                None => empty(),
            }
        }
    })
}

fn array<'a>(options: ParserOptions, depth: usize) -> Parser<'a, Value> {
    if depth >= options.max_depth {
        return empty();
    }
    let element = lazy(move || json_value(options, depth + 1));
    let elements = sep_by(element, literal_element(',')).or_else(pure(List::nil()));

    literal_element('[')
        .then_right(whitespace(options))
        .then_right(elements)
        .then_left(whitespace(options))
        .then_left(literal_element(']'))
        .map(|items: List<Value>| Value::Array(items.into_iter().collect()))
}

fn object<'a>(options: ParserOptions, depth: usize) -> Parser<'a, Value> {
    if depth >= options.max_depth {
        return empty();
    }
    let key = whitespace(options)
        .then_right(string(options))
        .then_left(whitespace(options))
        .then_left(literal_element(':'));
    let member = key.zip_with(lazy(move || json_value(options, depth + 1)), pair::pair);
    let members = sep_by(member, literal_element(',')).or_else(pure(List::nil()));

    literal_element('{')
        .then_right(whitespace(options))
        .then_right(members)
        .then_left(whitespace(options))
        .then_left(literal_element('}'))
        .map(|members: List<(String, Value)>| Value::Object(members.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::Map;

    fn literal_strings() -> JsonParser {
        JsonParser::new(ParserOptions {
            string_escapes: StringEscapes::Literal,
            ..Default::default()
        })
    }

    #[test]
    fn number_forms() {
        for (text, expected) in [
            ("0", 0.0),
            ("-0", -0.0),
            ("007", 7.0),
            ("1E3", 1000.0),
            ("1e+2", 100.0),
            ("-2.5e-1", -0.25),
        ] {
            assert_eq!(
                parse_document(text),
                Ok(Value::Number(expected)),
                "{text}"
            );
        }
    }

    #[test]
    fn number_stops_before_incomplete_parts() {
        assert_eq!(parse_value("1."), Some((".", Value::Number(1.0))));
        assert_eq!(parse_value("1e"), Some(("e", Value::Number(1.0))));
        assert_eq!(parse_value("1e+"), Some(("e+", Value::Number(1.0))));
        assert_eq!(parse_value("-"), None);
        assert_eq!(parse_value(".5"), None);
        assert_eq!(parse_value("+1"), None);
    }

    #[test]
    fn overflowing_number_is_rejected() {
        assert_eq!(parse_value("1e999"), None);
    }

    #[test]
    fn json_escapes_are_decoded() {
        assert_eq!(
            parse_document(r#""a\"b\\c\/d\b\f\n\r\t""#),
            Ok(Value::from("a\"b\\c/d\u{8}\u{c}\n\r\t"))
        );
        assert_eq!(parse_document(r#""\u0041\u00e9""#), Ok(Value::from("Aé")));
        assert_eq!(parse_document(r#""\ud83d\uDE00""#), Ok(Value::from("😀")));
    }

    #[test]
    fn bad_escapes_are_rejected() {
        assert_eq!(parse_value(r#""\x""#), None);
        assert_eq!(parse_value(r#""\u12""#), None);
        assert_eq!(parse_value(r#""\ud83d""#), None);
        assert_eq!(parse_value(r#""\ude00""#), None);
        assert_eq!(parse_value(r#""\ud83dA""#), None);
        assert_eq!(parse_value("\"a\nb\""), None);
    }

    #[test]
    fn literal_strings_keep_backslashes() {
        let parser = literal_strings();
        assert_eq!(
            parser.parse_value(r#""a\"b""#),
            Some((r#"b""#, Value::from(r"a\")))
        );
        assert_eq!(
            parser.parse_document("\"line\nbreak\""),
            Ok(Value::from("line\nbreak"))
        );
        assert_eq!(parser.parse_value("\"yay"), None);
    }

    #[test]
    fn empty_containers() {
        assert_eq!(parse_document("[]"), Ok(Value::Array(vec![])));
        assert_eq!(parse_document("[ \n ]"), Ok(Value::Array(vec![])));
        assert_eq!(parse_document("{}"), Ok(Value::Object(Map::new())));
        assert_eq!(parse_document("{ \t }"), Ok(Value::Object(Map::new())));
    }

    #[test]
    fn trailing_commas_are_rejected() {
        assert_eq!(parse_value("[1,]"), None);
        assert_eq!(parse_value(r#"{"a":1,}"#), None);
        assert_eq!(parse_value("[,1]"), None);
    }

    #[test]
    fn object_preserves_insertion_order() {
        let value = parse_document(r#"{"z": 1, "a": {"y": [], "b": null}, "z": 2}"#).unwrap();
        let object = value.as_object().unwrap();
        let keys: vec::Vec<&str> = object.keys().collect();
        assert_eq!(keys, ["z", "a"]);
        assert_eq!(object.get("z"), Some(&Value::Number(2.0)));
        assert_eq!(value.to_string(), r#"{"z":2,"a":{"y":[],"b":null}}"#);
    }

    #[test]
    fn max_depth_bounds_nesting() {
        let parser = JsonParser::new(ParserOptions {
            max_depth: 3,
            ..Default::default()
        });
        assert!(parser.parse_document("[{\"a\":[1]}]").is_ok());
        assert_eq!(
            parser.parse_document("[{\"a\":[[1]]}]"),
            Err(ParseError::NoValue)
        );

        let flat = JsonParser::new(ParserOptions {
            max_depth: 0,
            ..Default::default()
        });
        assert_eq!(flat.parse_document("1"), Ok(Value::Number(1.0)));
        assert_eq!(flat.parse_document("[]"), Err(ParseError::NoValue));
    }

    #[test]
    fn default_depth_accepts_moderate_nesting() {
        let depth = ParserOptions::default().max_depth;
        let mut text = "[".repeat(depth);
        text.push_str(&"]".repeat(depth));
        assert!(parse_document(&text).is_ok());

        let mut deeper = "[".repeat(depth + 1);
        deeper.push_str(&"]".repeat(depth + 1));
        assert_eq!(parse_document(&deeper), Err(ParseError::NoValue));
    }

    #[test]
    fn unicode_whitespace_is_opt_in() {
        let text = "\u{3000}[1,\u{2003}2]";
        assert_eq!(parse_value(text), None);
        let parser = JsonParser::new(ParserOptions {
            allow_unicode_whitespace: true,
            ..Default::default()
        });
        assert_eq!(
            parser.parse_document(text),
            Ok(Value::from(vec![Value::from(1.0), Value::from(2.0)]))
        );
    }

    #[test]
    fn document_rejects_trailing_input() {
        assert_eq!(parse_document(" null \n"), Ok(Value::Null));
        assert_eq!(parse_document("null x"), Err(ParseError::TrailingInput));
        assert_eq!(parse_document(""), Err(ParseError::NoValue));
        assert_eq!(parse_document("   "), Err(ParseError::NoValue));
    }

    #[test]
    fn leading_keyword_prefixes_fail() {
        assert_eq!(parse_value("nul"), None);
        assert_eq!(parse_value("tru"), None);
        assert_eq!(parse_value("fals"), None);
        assert_eq!(parse_value("nullx"), Some(("x", Value::Null)));
    }
}
