use thiserror::Error;

/// Why [`parse_document`](crate::parse_document) rejected its input.
///
/// Inside the grammar every failure is plain absence; this type only
/// separates the two ways a whole document can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not start with a JSON value.
    #[error("input does not start with a JSON value")]
    NoValue,
    /// A JSON value was parsed but input remained after it.
    #[error("unexpected input after JSON value")]
    TrailingInput,
}
