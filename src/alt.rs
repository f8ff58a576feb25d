use crate::parser::Parser;
use crate::result::ParseResult;
use crate::splice::Splice;

/// Parser that tries alternatives in order at the same position
///
/// The first branch that succeeds wins and later branches are never run.
/// A failed branch consumes nothing, so every branch starts from the same
/// cursor. All branches must produce the same output type.
///
/// `Alt` splices inside a sequence when its branches contribute the same
/// parts. Branches that merely share an output type still form a valid
/// parser, just not one that can sit inside `seq`.
#[derive(Clone, Copy)]
pub struct Alt<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> Alt<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Alt { first, second }
    }
}

impl<P, Q> Parser for Alt<P, Q>
where
    P: Parser,
    Q: Parser<Cursor = P::Cursor, Output = P::Output>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match self.first.parse(cursor) {
            Ok(success) => Ok(success),
            Err(_) => self.second.parse(cursor),
        }
    }
}

impl<P, Q> Splice for Alt<P, Q>
where
    P: Splice,
    Q: Splice<Cursor = P::Cursor, Parts = P::Parts>,
{
    type Cursor = P::Cursor;
    type Parts = P::Parts;

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        match self.first.parse_parts(cursor) {
            Ok(success) => Ok(success),
            Err(_) => self.second.parse_parts(cursor),
        }
    }
}

/// Conversion from a tuple of parsers to an `Alt` chain
///
/// A one-element tuple converts to the parser itself, so `alt((p,))`
/// behaves exactly like `p`.
pub trait IntoAlt {
    type Alt;

    fn into_alt(self) -> Self::Alt;
}

impl<A> IntoAlt for (A,) {
    type Alt = A;

    fn into_alt(self) -> Self::Alt {
        self.0
    }
}

impl<A, B> IntoAlt for (A, B) {
    type Alt = Alt<A, B>;

    fn into_alt(self) -> Self::Alt {
        Alt::new(self.0, self.1)
    }
}

impl<A, B, C> IntoAlt for (A, B, C) {
    type Alt = Alt<A, Alt<B, C>>;

    fn into_alt(self) -> Self::Alt {
        Alt::new(self.0, Alt::new(self.1, self.2))
    }
}

impl<A, B, C, D> IntoAlt for (A, B, C, D) {
    type Alt = Alt<A, Alt<B, Alt<C, D>>>;

    fn into_alt(self) -> Self::Alt {
        Alt::new(self.0, Alt::new(self.1, Alt::new(self.2, self.3)))
    }
}

impl<A, B, C, D, E> IntoAlt for (A, B, C, D, E) {
    type Alt = Alt<A, Alt<B, Alt<C, Alt<D, E>>>>;

    fn into_alt(self) -> Self::Alt {
        Alt::new(
            self.0,
            Alt::new(self.1, Alt::new(self.2, Alt::new(self.3, self.4))),
        )
    }
}

impl<A, B, C, D, E, F> IntoAlt for (A, B, C, D, E, F) {
    type Alt = Alt<A, Alt<B, Alt<C, Alt<D, Alt<E, F>>>>>;

    fn into_alt(self) -> Self::Alt {
        Alt::new(
            self.0,
            Alt::new(
                self.1,
                Alt::new(self.2, Alt::new(self.3, Alt::new(self.4, self.5))),
            ),
        )
    }
}

impl<A, B, C, D, E, F, G> IntoAlt for (A, B, C, D, E, F, G) {
    type Alt = Alt<A, Alt<B, Alt<C, Alt<D, Alt<E, Alt<F, G>>>>>>;

    fn into_alt(self) -> Self::Alt {
        Alt::new(
            self.0,
            Alt::new(
                self.1,
                Alt::new(
                    self.2,
                    Alt::new(self.3, Alt::new(self.4, Alt::new(self.5, self.6))),
                ),
            ),
        )
    }
}

impl<A, B, C, D, E, F, G, H> IntoAlt for (A, B, C, D, E, F, G, H) {
    type Alt = Alt<A, Alt<B, Alt<C, Alt<D, Alt<E, Alt<F, Alt<G, H>>>>>>>;

    fn into_alt(self) -> Self::Alt {
        Alt::new(
            self.0,
            Alt::new(
                self.1,
                Alt::new(
                    self.2,
                    Alt::new(
                        self.3,
                        Alt::new(self.4, Alt::new(self.5, Alt::new(self.6, self.7))),
                    ),
                ),
            ),
        )
    }
}

/// Convenience function to create an alternation parser from a tuple of
/// parsers
///
/// The empty alternation has no cursor type to infer; use [`fail`]
/// directly when an always-failing parser is needed.
///
/// [`fail`]: crate::primitive::fail
pub fn alt<T: IntoAlt>(parsers: T) -> T::Alt {
    parsers.into_alt()
}

pub trait OrExt: Sized {
    /// Tries this parser first, falling back to `other` at the same
    /// position if it fails
    fn or<Q>(self, other: Q) -> Alt<Self, Q> {
        Alt::new(self, other)
    }
}

impl<P: Parser> OrExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::SliceCursor;
    use crate::primitive::{fail, one};
    use crate::row::Row;
    use crate::seq::seq;

    #[test]
    fn test_first_branch_wins() {
        let data = b"ab";
        let cursor = SliceCursor::new(data);
        let parser = alt((one(), fail()));

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, b'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_falls_back_at_same_position() {
        let data = b"ab";
        let cursor = SliceCursor::new(data);
        let parser = alt((fail(), one()));

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, b'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_all_branches_fail() {
        let data = b"ab";
        let cursor = SliceCursor::new(data);
        let parser = alt((fail::<u8, _>(), fail()));

        assert!(parser.parse(cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_failing_branches_are_skipped_in_order() {
        let data = b"z";
        let cursor = SliceCursor::new(data);
        let parser = alt((fail(), fail(), one()));

        let (token, _) = parser.parse(cursor).unwrap();
        assert_eq!(token, b'z');
    }

    #[test]
    fn test_or_chaining() {
        let data = b"q";
        let cursor = SliceCursor::new(data);
        let parser = fail().or(one());

        let (token, _) = parser.parse(cursor).unwrap();
        assert_eq!(token, b'q');
    }

    #[test]
    fn test_alt_splices_inside_seq() {
        let data = b"xy";
        let cursor = SliceCursor::new(data);
        let parser = seq((alt((fail(), one())), one()));

        let (row, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(row, Row((b'x', b'y')));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_failed_branch_consumes_nothing() {
        let data = b"ab";
        let cursor = SliceCursor::new(data);
        let first = seq((one(), fail::<u8, _>()));
        let second = seq((one(), one()));
        let parser = alt((first, second));

        let (row, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(row, Row((b'a', b'b')));
        assert_eq!(cursor.position(), 2);
    }
}
