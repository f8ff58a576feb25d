use crate::parser::Parser;
use crate::result::ParseResult;
use crate::row::{Collapse, Concat};
use crate::splice::Splice;

/// Parser that runs two parsers in order, splicing their results into one
/// flat row
///
/// `Seq` is a binary node; [`seq`] folds a tuple of parsers into a chain of
/// them. Both sides contribute their parts, so nesting never shows up in
/// the output: `seq((a, seq((b, c))))` and `seq((a, b, c))` produce the
/// same flat row. A side that contributes nothing (such as `succ`)
/// disappears entirely, and a row of one element collapses to the bare
/// element.
///
/// The second parser starts where the first one stopped. If either side
/// fails the whole sequence fails and the caller's cursor is untouched.
#[derive(Clone, Copy)]
pub struct Seq<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> Seq<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Seq { first, second }
    }
}

impl<P, Q> Splice for Seq<P, Q>
where
    P: Splice,
    Q: Splice<Cursor = P::Cursor>,
    P::Parts: Concat<Q::Parts>,
{
    type Cursor = P::Cursor;
    type Parts = <P::Parts as Concat<Q::Parts>>::Output;

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        let (head, cursor) = self.first.parse_parts(cursor)?;
        let (tail, cursor) = self.second.parse_parts(cursor)?;
        Ok((head.concat(tail), cursor))
    }
}

impl<P, Q> Parser for Seq<P, Q>
where
    Seq<P, Q>: Splice,
    <Seq<P, Q> as Splice>::Parts: Collapse,
{
    type Cursor = <Seq<P, Q> as Splice>::Cursor;
    type Output = <<Seq<P, Q> as Splice>::Parts as Collapse>::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (parts, cursor) = self.parse_parts(cursor)?;
        Ok((parts.collapse(), cursor))
    }
}

/// Conversion from a tuple of parsers to a `Seq` chain
///
/// A one-element tuple converts to the parser itself, so `seq((p,))`
/// behaves exactly like `p`.
pub trait IntoSeq {
    type Seq;

    fn into_seq(self) -> Self::Seq;
}

impl<A> IntoSeq for (A,) {
    type Seq = A;

    fn into_seq(self) -> Self::Seq {
        self.0
    }
}

impl<A, B> IntoSeq for (A, B) {
    type Seq = Seq<A, B>;

    fn into_seq(self) -> Self::Seq {
        Seq::new(self.0, self.1)
    }
}

impl<A, B, C> IntoSeq for (A, B, C) {
    type Seq = Seq<A, Seq<B, C>>;

    fn into_seq(self) -> Self::Seq {
        Seq::new(self.0, Seq::new(self.1, self.2))
    }
}

impl<A, B, C, D> IntoSeq for (A, B, C, D) {
    type Seq = Seq<A, Seq<B, Seq<C, D>>>;

    fn into_seq(self) -> Self::Seq {
        Seq::new(self.0, Seq::new(self.1, Seq::new(self.2, self.3)))
    }
}

impl<A, B, C, D, E> IntoSeq for (A, B, C, D, E) {
    type Seq = Seq<A, Seq<B, Seq<C, Seq<D, E>>>>;

    fn into_seq(self) -> Self::Seq {
        Seq::new(
            self.0,
            Seq::new(self.1, Seq::new(self.2, Seq::new(self.3, self.4))),
        )
    }
}

impl<A, B, C, D, E, F> IntoSeq for (A, B, C, D, E, F) {
    type Seq = Seq<A, Seq<B, Seq<C, Seq<D, Seq<E, F>>>>>;

    fn into_seq(self) -> Self::Seq {
        Seq::new(
            self.0,
            Seq::new(
                self.1,
                Seq::new(self.2, Seq::new(self.3, Seq::new(self.4, self.5))),
            ),
        )
    }
}

impl<A, B, C, D, E, F, G> IntoSeq for (A, B, C, D, E, F, G) {
    type Seq = Seq<A, Seq<B, Seq<C, Seq<D, Seq<E, Seq<F, G>>>>>>;

    fn into_seq(self) -> Self::Seq {
        Seq::new(
            self.0,
            Seq::new(
                self.1,
                Seq::new(
                    self.2,
                    Seq::new(self.3, Seq::new(self.4, Seq::new(self.5, self.6))),
                ),
            ),
        )
    }
}

impl<A, B, C, D, E, F, G, H> IntoSeq for (A, B, C, D, E, F, G, H) {
    type Seq = Seq<A, Seq<B, Seq<C, Seq<D, Seq<E, Seq<F, Seq<G, H>>>>>>>;

    fn into_seq(self) -> Self::Seq {
        Seq::new(
            self.0,
            Seq::new(
                self.1,
                Seq::new(
                    self.2,
                    Seq::new(
                        self.3,
                        Seq::new(self.4, Seq::new(self.5, Seq::new(self.6, self.7))),
                    ),
                ),
            ),
        )
    }
}

/// Convenience function to create a sequence parser from a tuple of parsers
///
/// The empty sequence has no cursor type to infer; use [`succ`] directly
/// when a neutral parser is needed.
///
/// [`succ`]: crate::primitive::succ
pub fn seq<T: IntoSeq>(parsers: T) -> T::Seq {
    parsers.into_seq()
}

pub trait AndExt: Sized {
    /// Chains another parser to run after this one, splicing both results
    fn and<Q>(self, next: Q) -> Seq<Self, Q> {
        Seq::new(self, next)
    }
}

impl<P: Splice> AndExt for P {}
