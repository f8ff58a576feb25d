use std::marker::PhantomData;

use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::splice::Splice;

/// Parser backed by a plain function from cursor to parse result
///
/// The main escape hatch for grammars the combinators cannot express
/// directly, and the usual way to tie a recursive grammar: a named
/// function can refer to itself through `from_fn` where a composed parser
/// type could not.
pub struct FromFn<F, C, T> {
    function: F,
    _marker: PhantomData<fn(C) -> T>,
}

impl<F, C, T> FromFn<F, C, T> {
    pub fn new(function: F) -> Self {
        FromFn {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F: Clone, C, T> Clone for FromFn<F, C, T> {
    fn clone(&self) -> Self {
        FromFn {
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F: Copy, C, T> Copy for FromFn<F, C, T> {}

impl<F, C, T> Parser for FromFn<F, C, T>
where
    C: Cursor,
    F: Fn(C) -> ParseResult<T, C>,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (self.function)(cursor)
    }
}

impl<F, C, T> Splice for FromFn<F, C, T>
where
    C: Cursor,
    F: Fn(C) -> ParseResult<T, C>,
{
    type Cursor = C;
    type Parts = (T,);

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        let (value, cursor) = self.parse(cursor)?;
        Ok(((value,), cursor))
    }
}

/// Convenience function to create a FromFn parser
pub fn from_fn<F, C, T>(function: F) -> FromFn<F, C, T>
where
    C: Cursor,
    F: Fn(C) -> ParseResult<T, C>,
{
    FromFn::new(function)
}
