use crate::maybe::Maybe;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::splice::Splice;

/// Parser that makes another parser optional
///
/// Never fails. Inner success yields `Present(value)` and the advanced
/// cursor; inner failure yields `Absent` and the caller's original cursor,
/// so a failed attempt leaves no trace on the position.
#[derive(Clone, Copy)]
pub struct Opt<P> {
    parser: P,
}

impl<P> Opt<P> {
    pub fn new(parser: P) -> Self {
        Opt { parser }
    }
}

impl<P: Parser> Parser for Opt<P> {
    type Cursor = P::Cursor;
    type Output = Maybe<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match self.parser.parse(cursor) {
            Ok((value, next)) => Ok((Maybe::Present(value), next)),
            Err(_) => Ok((Maybe::Absent, cursor)),
        }
    }
}

impl<P: Parser> Splice for Opt<P> {
    type Cursor = P::Cursor;
    type Parts = (Maybe<P::Output>,);

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        let (value, cursor) = self.parse(cursor)?;
        Ok(((value,), cursor))
    }
}

/// Convenience function to create an Opt parser
pub fn opt<P: Parser>(parser: P) -> Opt<P> {
    Opt::new(parser)
}

pub trait OptExt: Sized {
    /// Makes this parser optional, yielding `Present` or `Absent`
    fn opt(self) -> Opt<Self> {
        Opt::new(self)
    }
}

impl<P: Parser> OptExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::SliceCursor;
    use crate::primitive::{fail, one};
    use crate::row::Row;
    use crate::seq::seq;

    #[test]
    fn test_present_on_match() {
        let data = b"ab";
        let cursor = SliceCursor::new(data);
        let parser = opt(one());

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, Maybe::Present(b'a'));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_absent_at_end_of_input() {
        let data: &[u8] = b"";
        let cursor = SliceCursor::new(data);
        let parser = opt(one());

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, Maybe::Absent);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_inner_failure_restores_original_cursor() {
        let data = b"ab";
        let cursor = SliceCursor::new(data);
        let parser = opt(seq((one(), one(), one())));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, Maybe::Absent);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.value(), Some(b'a'));
    }

    #[test]
    fn test_opt_splices_as_one_element() {
        let data = b"ab";
        let cursor = SliceCursor::new(data);
        let parser = seq((opt(one()), one()));

        let (row, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(row, Row((Maybe::Present(b'a'), b'b')));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_absent_still_advances_the_rest_of_a_sequence() {
        let data = b"ab";
        let cursor = SliceCursor::new(data);
        let parser = seq((opt(fail::<u8, _>()), one()));

        let (row, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(row, Row((Maybe::Absent, b'a')));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_opt_ext_method() {
        let data = b"7";
        let cursor = SliceCursor::new(data);
        let parser = one().opt();

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, Maybe::Present(b'7'));
    }
}
