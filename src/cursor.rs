/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable position in a sequence of tokens. Parsers never
/// mutate a cursor they are given; they return an advanced copy on success.
/// Backtracking is implicit: a caller that still holds an earlier cursor can
/// retry from it. This abstraction lets parsers work with different
/// underlying data (bytes, chars, token enums) behind the same combinator
/// interface.
pub trait Cursor: Copy + Clone + Sized {
    /// The type of tokens this cursor walks over
    type Token: Clone;

    /// Get the token at the current cursor position
    ///
    /// Returns `None` if the cursor is at the end of the sequence
    fn value(&self) -> Option<Self::Token>;

    /// Advance the cursor past the current token
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Get the current offset from the start of the sequence
    ///
    /// For end-of-sequence cursors this is the sequence length. Combinators
    /// never branch on it; it exists for callers, tests and trace events to
    /// observe progress.
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.value().is_none()
    }
}
