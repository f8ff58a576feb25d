use crate::parser::Parser;
use crate::result::ParseResult;
use crate::splice::Splice;

/// Parser that applies another parser one or more times
///
/// Fails only when the very first attempt fails; afterwards it behaves
/// like [`rep`] and its result vector is the one `rep` would have
/// collected at the same starting position.
///
/// [`rep`]: crate::rep::rep
#[derive(Clone, Copy)]
pub struct Rep1<P> {
    parser: P,
}

impl<P> Rep1<P> {
    pub fn new(parser: P) -> Self {
        Rep1 { parser }
    }
}

impl<P: Parser> Parser for Rep1<P> {
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (first, mut cursor) = self.parser.parse(cursor)?;
        let mut values = vec![first];

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

impl<P: Parser> Splice for Rep1<P> {
    type Cursor = P::Cursor;
    type Parts = (Vec<P::Output>,);

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        let (values, cursor) = self.parse(cursor)?;
        Ok(((values,), cursor))
    }
}

/// Convenience function to create a Rep1 parser
pub fn rep1<P: Parser>(parser: P) -> Rep1<P> {
    Rep1::new(parser)
}

pub trait Rep1Ext: Sized {
    /// Applies this parser one or more times, collecting the results
    fn rep1(self) -> Rep1<Self> {
        Rep1::new(self)
    }
}

impl<P: Parser> Rep1Ext for P {}
