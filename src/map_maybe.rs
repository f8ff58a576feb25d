use crate::maybe::Maybe;
use crate::parser::Parser;
use crate::result::{ParseFailure, ParseResult};
use crate::splice::Splice;

/// Parser combinator that transforms the output of a parser through a
/// mapper that may reject the parse
///
/// The mapper returns [`Maybe`]: `Present(v)` succeeds with `v`, `Absent`
/// turns the whole parse into a failure. Rejection consumes nothing; the
/// caller's cursor is exactly where it was before the attempt.
///
/// The returned sentinel being `Maybe` rather than `Option` keeps
/// rejection distinct from grammars whose values are themselves optional.
#[derive(Clone, Copy)]
pub struct MapMaybe<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapMaybe<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapMaybe { parser, mapper }
    }
}

impl<P, F, T, U> Parser for MapMaybe<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> Maybe<U>,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, next) = self.parser.parse(cursor)?;
        match (self.mapper)(value) {
            Maybe::Present(mapped) => Ok((mapped, next)),
            Maybe::Absent => Err(ParseFailure),
        }
    }
}

impl<P, F, T, U> Splice for MapMaybe<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> Maybe<U>,
{
    type Cursor = P::Cursor;
    type Parts = (U,);

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        let (value, cursor) = self.parse(cursor)?;
        Ok(((value,), cursor))
    }
}

/// Convenience function to create a MapMaybe parser
pub fn map_maybe<P, F, T, U>(parser: P, mapper: F) -> MapMaybe<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> Maybe<U>,
{
    MapMaybe::new(parser, mapper)
}

/// Extension trait to add .map_maybe() method support for parsers
pub trait MapMaybeExt: Parser + Sized {
    fn map_maybe<F, U>(self, mapper: F) -> MapMaybe<Self, F>
    where
        F: Fn(Self::Output) -> Maybe<U>,
    {
        MapMaybe::new(self, mapper)
    }
}

/// Implement MapMaybeExt for all parsers
impl<P> MapMaybeExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::SliceCursor;
    use crate::primitive::one;
    use crate::row::Row;
    use crate::seq::seq;

    fn to_digit(byte: u8) -> Maybe<u8> {
        if byte.is_ascii_digit() {
            Maybe::Present(byte - b'0')
        } else {
            Maybe::Absent
        }
    }

    #[test]
    fn test_present_transforms() {
        let data = b"5";
        let cursor = SliceCursor::new(data);
        let parser = one().map_maybe(to_digit);

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 5);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_absent_rejects_without_consuming() {
        let data = b"+34";
        let cursor = SliceCursor::new(data);
        let parser = one().map_maybe(to_digit);

        assert!(parser.parse(cursor).is_err());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.value(), Some(b'+'));
    }

    #[test]
    fn test_rejection_after_partial_input() {
        let data = b"12+34";
        let start = SliceCursor::new(data);
        let parser = one().map_maybe(to_digit);

        let (tens, after_tens) = parser.parse(start).unwrap();
        let (units, after_units) = parser.parse(after_tens).unwrap();
        assert_eq!((tens, units), (1, 2));

        assert!(parser.parse(after_units).is_err());
        assert_eq!(after_units.position(), 2);
        assert_eq!(after_units.value(), Some(b'+'));
    }

    #[test]
    fn test_inner_failure_propagates() {
        let data: &[u8] = b"";
        let cursor = SliceCursor::new(data);
        let parser = one().map_maybe(|byte| Maybe::Present(byte));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_map_maybe_splices_as_one_element() {
        let data = b"42";
        let cursor = SliceCursor::new(data);
        let parser = seq((one().map_maybe(to_digit), one().map_maybe(to_digit)));

        let (row, _) = parser.parse(cursor).unwrap();
        assert_eq!(row, Row((4, 2)));
    }

    #[test]
    fn test_function_syntax() {
        let data = b"9";
        let cursor = SliceCursor::new(data);
        let parser = map_maybe(one(), |byte: u8| Maybe::Present(char::from(byte)));

        let (ch, _) = parser.parse(cursor).unwrap();
        assert_eq!(ch, '9');
    }
}
