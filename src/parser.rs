use crate::cursor::Cursor;
use crate::result::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is a pure, stateless value: one parsing step from a cursor to
/// either a value plus the advanced cursor, or [`ParseFailure`]. Composing
/// operators bound their operands with `Parser<Cursor = First::Cursor>`, so
/// mixing parsers over different stream types is rejected at compile time,
/// before any input is processed.
///
/// [`ParseFailure`]: crate::result::ParseFailure
pub trait Parser: Sized {
    /// The cursor type this parser consumes
    type Cursor: Cursor;

    /// The value produced on a successful parse
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and advanced cursor on success,
    /// or Err if the parse fails. Failure never consumes input: the caller
    /// still holds the cursor it passed in and can retry from it.
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor>;
}
