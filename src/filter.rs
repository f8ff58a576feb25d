use crate::maybe::Maybe;
use crate::parser::Parser;
use crate::result::{ParseFailure, ParseResult};
use crate::splice::Splice;

/// Builds a rejecting mapper from a predicate, for use with `map_maybe`
///
/// The returned mapper passes the value through unchanged when the
/// predicate holds and returns `Absent` otherwise, which `map_maybe`
/// interprets as failure:
///
/// ```
/// use flatcomb::cursors::SliceCursor;
/// use flatcomb::{Parser, filter, map_maybe, one};
///
/// let digit = map_maybe(one(), filter(|byte: &u8| byte.is_ascii_digit()));
/// assert!(digit.parse(SliceCursor::new(b"7")).is_ok());
/// assert!(digit.parse(SliceCursor::new(b"+")).is_err());
/// ```
pub fn filter<T, F>(predicate: F) -> impl Fn(T) -> Maybe<T> + Copy
where
    F: Fn(&T) -> bool + Copy,
{
    move |value| {
        if predicate(&value) {
            Maybe::Present(value)
        } else {
            Maybe::Absent
        }
    }
}

/// Parser that applies a predicate to filter the output of another parser
///
/// `p.filter(pred)` fuses `map_maybe(p, filter(pred))` into one step: the
/// value passes through unchanged when the predicate holds, otherwise the
/// parse fails and the caller's cursor stays put.
#[derive(Clone, Copy)]
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Filter { parser, predicate }
    }
}

impl<P, F, T> Parser for Filter<P, F>
where
    P: Parser<Output = T>,
    F: Fn(&T) -> bool,
{
    type Cursor = P::Cursor;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, next) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, next))
        } else {
            Err(ParseFailure)
        }
    }
}

impl<P, F, T> Splice for Filter<P, F>
where
    P: Parser<Output = T>,
    F: Fn(&T) -> bool,
{
    type Cursor = P::Cursor;
    type Parts = (T,);

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        let (value, cursor) = self.parse(cursor)?;
        Ok(((value,), cursor))
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser + Sized {
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate)
    }
}

impl<P: Parser> FilterExt for P {}
