//! Temporal masks: a small boolean expression language for deciding whether
//! a timestamp falls inside a set of times, built for per-event filtering in
//! streaming pipelines.
//!
//! # Examples
//!
//! Keeping only events from weekday business hours:
//!
//! ```
//! use chrono::DateTime;
//! use temporal_mask::{matches, TimeFields};
//!
//! let timestamp = DateTime::parse_from_rfc3339("2019-08-26T15:15:15Z").unwrap();
//! let fields = TimeFields::from(&timestamp);
//!
//! assert_eq!(Ok(true), matches("W>=1 & W<=5 & h>=9 & h<=18", &fields));
//! assert_eq!(Ok(false), matches("W==0 | W==6", &fields));
//! ```
//!
//! Masks can also be written relative to the current time and expanded
//! before evaluation:
//!
//! ```
//! use chrono::DateTime;
//! use temporal_mask::{expand, TimeFields};
//!
//! let now = DateTime::parse_from_rfc3339("2019-08-27T20:30:00Z").unwrap();
//! let now = TimeFields::from(&now);
//!
//! assert_eq!("h==20&m==30", expand("h==now & m==now", &now));
//! ```
//!
//! # Mask language
//!
//! A mask is a sequence of atomic predicates joined by `&` and `|`, with
//! optional parenthesized grouping. The language is case-sensitive:
//!
//! * Fields: `Y` (year), `M` (month, 1–12), `D` (day, 1–31), `h` (hour,
//!   0–23), `m` (minute, 0–59), `s` (second, 0–59) and `W` (weekday,
//!   0 = Sunday through 6 = Saturday);
//! * Comparison: `==`, `!=`, `>=`, `<=`, `>` and `<`, against unsigned
//!   integer literals;
//! * Boolean structure: `&` and `|`, with `&` binding tighter, and
//!   parentheses for explicit grouping;
//! * Relative tokens: `now` stands for the current value of the most
//!   recently named field and is rewritten by [`expand`] before matching.
//!
//! As an example, the following are all valid masks:
//!
//! ```text
//! Y >= 2019 & (M==5 | M==8) | (h > 8 & h < 6)
//! W>=1 & W<=5 & h==15 & m==15
//! h==now & m==now
//! ```
//!
//! Malformed predicates (a missing literal, an unknown field symbol) are
//! reported as [`MaskError`] instead of silently evaluating to false, since
//! masks are typically operator-supplied configuration. An unmatched
//! closing parenthesis is tolerated and closes the expression at its
//! implicit outer boundary.
//!
//! Evaluation is purely computational: each call owns its own scratch
//! state, so masks can be matched concurrently from any number of threads
//! without synchronization.
mod error;
mod expansion;
mod fields;
mod lexer;
mod predicates;
mod scanner;

pub use crate::{
    error::MaskError,
    expansion::expand,
    fields::{TimeField, TimeFields},
    scanner::matches,
};
