use thiserror::Error;

/// Error returned when a parser does not match.
///
/// Failure is a single bit: no message, no location, no farthest-failure
/// tracking. A caller that wants to retry still holds the cursor it passed
/// in, so nothing else needs to travel with the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input did not match")]
pub struct ParseFailure;

/// Result of one parsing step: the parsed value together with the cursor
/// advanced past the consumed tokens, or [`ParseFailure`].
pub type ParseResult<T, C> = Result<(T, C), ParseFailure>;
