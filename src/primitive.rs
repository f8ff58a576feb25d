use std::marker::PhantomData;

use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{ParseFailure, ParseResult};
use crate::row::Row;
use crate::splice::Splice;

/// Parser that always succeeds without consuming input, yielding the empty row
///
/// Inside a sequence it contributes nothing: `seq((succ(), p))` behaves
/// exactly like `p`.
pub struct Succ<C> {
    _cursor: PhantomData<C>,
}

impl<C> Succ<C> {
    pub fn new() -> Self {
        Succ {
            _cursor: PhantomData,
        }
    }
}

impl<C> Clone for Succ<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Succ<C> {}

impl<C: Cursor> Parser for Succ<C> {
    type Cursor = C;
    type Output = Row<()>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        Ok((Row(()), cursor))
    }
}

impl<C: Cursor> Splice for Succ<C> {
    type Cursor = C;
    type Parts = ();

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        Ok(((), cursor))
    }
}

/// Convenience function to create a Succ parser
pub fn succ<C: Cursor>() -> Succ<C> {
    Succ::new()
}

/// Parser that always fails
///
/// The phantom `T` fixes the output type so `fail` can stand in for a
/// branch in alternation contexts: `alt((fail::<char, _>(), p))`.
pub struct Fail<T, C> {
    _marker: PhantomData<fn() -> (T, C)>,
}

impl<T, C> Fail<T, C> {
    pub fn new() -> Self {
        Fail {
            _marker: PhantomData,
        }
    }
}

impl<T, C> Clone for Fail<T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for Fail<T, C> {}

impl<T, C: Cursor> Parser for Fail<T, C> {
    type Cursor = C;
    type Output = T;

    fn parse(&self, _cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        Err(ParseFailure)
    }
}

impl<T, C: Cursor> Splice for Fail<T, C> {
    type Cursor = C;
    type Parts = (T,);

    fn parse_parts(&self, _cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        Err(ParseFailure)
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T, C: Cursor>() -> Fail<T, C> {
    Fail::new()
}

/// Parser that consumes exactly one token
///
/// Succeeds with the current token and the advanced cursor; fails at end
/// of input.
pub struct One<C> {
    _cursor: PhantomData<C>,
}

impl<C> One<C> {
    pub fn new() -> Self {
        One {
            _cursor: PhantomData,
        }
    }
}

impl<C> Clone for One<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for One<C> {}

impl<C: Cursor> Parser for One<C> {
    type Cursor = C;
    type Output = C::Token;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match cursor.value() {
            Some(token) => Ok((token, cursor.next())),
            None => Err(ParseFailure),
        }
    }
}

impl<C: Cursor> Splice for One<C> {
    type Cursor = C;
    type Parts = (C::Token,);

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        let (token, cursor) = self.parse(cursor)?;
        Ok(((token,), cursor))
    }
}

/// Convenience function to create a One parser
pub fn one<C: Cursor>() -> One<C> {
    One::new()
}
