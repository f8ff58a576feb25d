//! # Flatcomb - Flattening Parser Combinator Library
//!
//! A parser combinator library built around flat heterogeneous result rows.
//!
//! Flatcomb provides composable, type-safe parsers that combine into
//! complex parsing logic from simple building blocks. The library
//! emphasizes:
//!
//! - **Flat results**: sequencing splices sub-results into one flat row,
//!   never tuples-of-tuples, and a single-element row collapses to the
//!   bare value
//! - **Zero panics**: parse failure is an ordinary `Result` carrying a
//!   single payload-free failure value
//! - **Pure parsers**: combinators are immutable values over a copyable
//!   cursor, so the same parser is safely reused and shared across
//!   independent parses
//! - **Static checking**: cursor mismatches and shape mismatches between
//!   composed parsers are rejected at compile time, never at parse time

pub mod alt;
pub mod cursor;
pub mod cursors;
pub mod filter;
pub mod fold;
pub mod from_fn;
pub mod lazy;
pub mod map;
pub mod map_maybe;
pub mod maybe;
pub mod opt;
pub mod parser;
pub mod primitive;
pub mod rep;
pub mod rep1;
pub mod result;
pub mod row;
pub mod seq;
pub mod splice;
pub mod trace;

pub use alt::{Alt, IntoAlt, OrExt, alt};
pub use cursor::Cursor;
pub use cursors::{SliceCursor, StrCursor};
pub use filter::{Filter, FilterExt, filter};
pub use fold::{foldl, foldr};
pub use from_fn::{FromFn, from_fn};
pub use lazy::{Lazy, lazy};
pub use map::{Map, MapExt, map};
pub use map_maybe::{MapMaybe, MapMaybeExt, map_maybe};
pub use maybe::Maybe;
pub use maybe::Maybe::{Absent, Present};
pub use opt::{Opt, OptExt, opt};
pub use parser::Parser;
pub use primitive::{Fail, One, Succ, fail, one, succ};
pub use rep::{Rep, RepExt, rep};
pub use rep1::{Rep1, Rep1Ext, rep1};
pub use result::{ParseFailure, ParseResult};
pub use row::{Collapse, Concat, Pick, Row};
pub use seq::{AndExt, IntoSeq, Seq, seq};
pub use splice::Splice;
pub use trace::{Trace, TraceExt, trace};
