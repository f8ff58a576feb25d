use crate::parser::Parser;
use crate::result::ParseResult;
use crate::splice::Splice;

/// Parser combinator that transforms the output of a parser using a mapping
/// function
///
/// The mapper runs only on success; failure propagates untouched. A row
/// output is spread into the mapper through destructuring:
/// `.map(|Row((a, b))| ...)`. Whatever the mapper returns contributes one
/// element when the `Map` sits inside a sequence.
///
/// For mappers that may reject the parse, see [`map_maybe`].
///
/// [`map_maybe`]: crate::map_maybe::map_maybe
#[derive(Clone, Copy)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, T, U> Parser for Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped_value = (self.mapper)(value);
        Ok((mapped_value, cursor))
    }
}

impl<P, F, T, U> Splice for Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    type Cursor = P::Cursor;
    type Parts = (U,);

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        let (value, cursor) = self.parse(cursor)?;
        Ok(((value,), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
