use std::marker::PhantomData;

use crate::parser::Parser;
use crate::result::ParseResult;
use crate::splice::Splice;

/// A lazy parser that defers the construction of the actual parser until
/// parse time. This is useful for breaking mutual recursion between
/// parsers whose types can be named; for recursion through unnameable
/// composed types, see [`from_fn`].
///
/// [`from_fn`]: crate::from_fn::from_fn
pub struct Lazy<F, P> {
    factory: F,
    _parser: PhantomData<fn() -> P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Lazy {
            factory,
            _parser: PhantomData,
        }
    }
}

impl<F: Clone, P> Clone for Lazy<F, P> {
    fn clone(&self) -> Self {
        Lazy {
            factory: self.factory.clone(),
            _parser: PhantomData,
        }
    }
}

impl<F: Copy, P> Copy for Lazy<F, P> {}

impl<F, P> Parser for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

impl<F, P> Splice for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    type Cursor = P::Cursor;
    type Parts = (P::Output,);

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        let (value, cursor) = self.parse(cursor)?;
        Ok(((value,), cursor))
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
