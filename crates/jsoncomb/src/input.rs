/// A cursor into the source text: the unconsumed suffix.
///
/// `Input` is `Copy`, so a checkpoint is just a saved value and backtracking
/// is restoring it. Two cursors into the same text compare by how much input
/// remains, which is how repetition detects a step that made no progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    rest: &'a str,
}

impl<'a> Input<'a> {
    /// A cursor at the start of `text`.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// The unconsumed text.
    #[must_use]
    pub const fn as_str(self) -> &'a str {
        self.rest
    }

    /// Remaining length in bytes.
    #[must_use]
    pub const fn len(self) -> usize {
        self.rest.len()
    }

    /// Returns `true` at end of input.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.rest.is_empty()
    }

    /// The next character and the cursor after it.
    #[must_use]
    pub fn split_first(self) -> Option<(char, Self)> {
        let c = self.rest.chars().next()?;
        Some((c, Self::new(&self.rest[c.len_utf8()..])))
    }

    /// The text consumed between `start` and `self`.
    ///
    /// `start` must be an earlier cursor into the same text.
    #[must_use]
    pub fn consumed_since(self, start: Self) -> &'a str {
        let consumed = start.rest.len().saturating_sub(self.rest.len());
        &start.rest[..consumed]
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}
