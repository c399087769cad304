//! A parser-combinator engine over an immutable input cursor, and a
//! recursive-descent JSON grammar built from it.
//!
//! Parsers are pure functions from an [`Input`] to an optional pair of the
//! remaining input and a value. Failure is absence: there is no error
//! payload, and alternatives backtrack by re-running on the same cursor.
//! Repetition collects into persistent [`List`]s.
//!
//! ```rust
//! use jsoncomb::{parse_document, parse_value, ParseError, Value};
//!
//! assert_eq!(parse_value("123abc"), Some(("abc", Value::Number(123.0))));
//! assert_eq!(parse_document("123abc"), Err(ParseError::TrailingInput));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod escape;
mod grammar;
mod input;
pub mod list;
pub mod maybe;
mod options;
pub mod pair;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use grammar::{JsonParser, parse_document, parse_value};
pub use input::Input;
pub use list::List;
pub use options::{ParserOptions, StringEscapes};
pub use parser::{
    Parser, ap, choice, count, empty, end_of_input, lazy, literal_element, literal_sequence,
    look_ahead, many, optional, pure, satisfy, sep_by, sequence_of, some,
};
pub use value::{Array, Map, Value};
