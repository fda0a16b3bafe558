//! # toolbelt
//!
//! A grab-bag of small, self-contained helpers: flexible datetime parsing,
//! lazy depth-first flattening of nested values, signed-range arithmetic,
//! and seeded random sampling.
//!
//! Every function is a pure, synchronous transformation of its inputs — no
//! I/O, no global state, no lifecycle. The only mutable state anywhere is
//! RNG internals, and those are either created per call or explicitly lent
//! in by the caller.
//!
//! ## Modules
//!
//! - [`temporal`] — datetime parsing with format guessing and ISO-8601 offset handling
//! - [`flatten`] — lazy depth-first flattening of nested value trees
//! - [`numeric`] — signed integer range arithmetic
//! - [`sampling`] — seeded random draws, integer streams, and shuffles
//! - [`error`] — error types

pub mod error;
pub mod flatten;
pub mod numeric;
pub mod sampling;
pub mod temporal;

pub use error::{InvalidChoiceError, Result, ToolbeltError};
pub use flatten::{flatten, Flatten, Nested};
pub use numeric::max_signed_value;
pub use sampling::{draw, get_rng, integers, shuffle, Integers, RngHandle, Seed};
pub use temporal::{parse, DateTimeLike, ParsedDatetime};
