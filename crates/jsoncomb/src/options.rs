/// How backslashes inside JSON strings are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringEscapes {
    /// Full JSON escaping: `\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t` and
    /// `\uXXXX`, with UTF-16 surrogate pairs combined. Unescaped control
    /// characters and unpaired surrogates are rejected.
    #[default]
    Json,
    /// Every character other than `"` is taken as written, backslashes
    /// included. A string therefore ends at the first `"`.
    Literal,
}

/// Configuration options for the JSON grammar.
///
/// # Examples
///
/// ```rust
/// use jsoncomb::{JsonParser, ParserOptions, StringEscapes, Value};
///
/// let parser = JsonParser::new(ParserOptions {
///     string_escapes: StringEscapes::Literal,
///     ..Default::default()
/// });
/// let value = parser.parse_document(r#""a\b""#).unwrap();
/// assert_eq!(value, Value::String(r"a\b".into()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to allow any Unicode whitespace between JSON tokens.
    ///
    /// By default only the four whitespace characters defined by
    /// RFC 8259 are skipped: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Escape handling inside string literals.
    ///
    /// # Default
    ///
    /// [`StringEscapes::Json`]
    pub string_escapes: StringEscapes,

    /// The deepest nesting of arrays and objects accepted.
    ///
    /// The grammar recurses once per nesting level, so this bounds stack
    /// usage. A document nested deeper is rejected. `0` rejects every array
    /// and object.
    ///
    /// # Default
    ///
    /// `64`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_unicode_whitespace: false,
            string_escapes: StringEscapes::default(),
            max_depth: 64,
        }
    }
}

impl ParserOptions {
    pub(crate) fn is_whitespace(&self, c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\r') || (self.allow_unicode_whitespace && c.is_whitespace())
    }
}
