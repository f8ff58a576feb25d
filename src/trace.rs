use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::splice::Splice;

/// Parser that emits trace-level events around another parser
///
/// Purely observational: the wrapped parser's output, failure behavior and
/// splice shape pass through unchanged. Events carry the label and the
/// cursor position; nothing is emitted unless the host program installs a
/// `tracing` subscriber.
#[derive(Clone, Copy)]
pub struct Trace<P> {
    parser: P,
    label: &'static str,
}

impl<P> Trace<P> {
    pub fn new(parser: P, label: &'static str) -> Self {
        Trace { parser, label }
    }
}

impl<P: Parser> Parser for Trace<P> {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        tracing::trace!(parser = self.label, position = cursor.position(), "trying");

        match self.parser.parse(cursor) {
            Ok((value, next)) => {
                tracing::trace!(parser = self.label, position = next.position(), "matched");
                Ok((value, next))
            }
            Err(failure) => {
                tracing::trace!(parser = self.label, position = cursor.position(), "no match");
                Err(failure)
            }
        }
    }
}

impl<P: Splice> Splice for Trace<P> {
    type Cursor = P::Cursor;
    type Parts = P::Parts;

    fn parse_parts(&self, cursor: Self::Cursor) -> ParseResult<Self::Parts, Self::Cursor> {
        tracing::trace!(parser = self.label, position = cursor.position(), "trying");

        match self.parser.parse_parts(cursor) {
            Ok((parts, next)) => {
                tracing::trace!(parser = self.label, position = next.position(), "matched");
                Ok((parts, next))
            }
            Err(failure) => {
                tracing::trace!(parser = self.label, position = cursor.position(), "no match");
                Err(failure)
            }
        }
    }
}

/// Convenience function to create a Trace parser
pub fn trace<P>(parser: P, label: &'static str) -> Trace<P> {
    Trace::new(parser, label)
}

pub trait TraceExt: Sized {
    /// Wraps this parser with trace-level event emission under a label
    fn traced(self, label: &'static str) -> Trace<Self> {
        Trace::new(self, label)
    }
}

impl<P: Parser> TraceExt for P {}
