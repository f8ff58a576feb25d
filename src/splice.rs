use crate::cursor::Cursor;
use crate::result::ParseResult;

/// How a parser's success value enters an enclosing sequence
///
/// Sequencing flattens: `seq((a, b, c))` yields one flat row no matter how
/// its components were built. For that to work without runtime inspection,
/// every parser declares the shape of its contribution up front:
///
/// - most parsers contribute their output as a single element,
///   `Parts = (Output,)`;
/// - `succ()` contributes nothing, `Parts = ()`;
/// - sequences contribute their elements spliced in flat, so nesting
///   `seq` (or chaining `.and`) never produces rows inside rows;
/// - alternation passes its branches' shared shape through.
///
/// `parse_parts` is the same parsing step as [`Parser::parse`] with the
/// result in contribution form; for every implementation in this crate,
/// `parse` is `parse_parts` followed by [`Collapse`].
///
/// [`Parser::parse`]: crate::parser::Parser::parse
/// [`Collapse`]: crate::row::Collapse
pub trait Splice {
    /// The cursor type this parser consumes
    type Cursor: Cursor;

    /// Backing tuple contributed to an enclosing sequence
    type Parts;

    /// Run this parser, producing its contribution tuple
    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor>;
}
