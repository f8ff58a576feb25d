use crate::parser::Parser;
use crate::result::ParseResult;
use crate::splice::Splice;

/// Parser that applies another parser zero or more times
///
/// Collects every success value into a `Vec` and stops at the position
/// immediately before the first failing attempt. Never fails: zero matches
/// yield an empty vector and the unchanged cursor.
///
/// The inner parser must consume input on success; repeating a parser that
/// succeeds without consuming never terminates.
#[derive(Clone, Copy)]
pub struct Rep<P> {
    parser: P,
}

impl<P> Rep<P> {
    pub fn new(parser: P) -> Self {
        Rep { parser }
    }
}

impl<P: Parser> Parser for Rep<P> {
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let mut values = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    values.push(value);
                    cursor = next;
                }
                Err(_) => break,
            }
        }

        Ok((values, cursor))
    }
}

impl<P: Parser> Splice for Rep<P> {
    type Cursor = P::Cursor;
    type Parts = (Vec<P::Output>,);

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        let (values, cursor) = self.parse(cursor)?;
        Ok(((values,), cursor))
    }
}

/// Convenience function to create a Rep parser
pub fn rep<P: Parser>(parser: P) -> Rep<P> {
    Rep::new(parser)
}

pub trait RepExt: Sized {
    /// Applies this parser zero or more times, collecting the results
    fn rep(self) -> Rep<Self> {
        Rep::new(self)
    }
}

impl<P: Parser> RepExt for P {}
