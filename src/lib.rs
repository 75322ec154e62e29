//! A date range value type: one or two inclusive bounds, each an instant at
//! some precision (year down to millisecond), or unbounded.
//!
//! Ranges convert losslessly between three forms:
//!
//! - text: `2011-02`, `*`, `[2007-12-03 TO 2007-12]`, `[2010 TO *]`;
//! - the in-memory [`DateRange`];
//! - a compact binary encoding (see [`codec`]).
//!
//! ```
//! use daterange::{DateRange, Precision};
//!
//! let range: DateRange = "[2007-12-03 TO 2007-12]".parse().unwrap();
//! assert_eq!(range.lower().precision(), Some(Precision::Day));
//! assert_eq!(range.to_string(), "[2007-12-03 TO 2007-12]");
//! ```

pub mod cliopt;
pub mod codec;
pub mod error;
pub mod format;
pub mod input;
pub mod model;
pub mod output;
mod parser;
pub mod runner;

pub use codec::{DateRangeCodec, TypeCodec, DATE_RANGE_CODEC, DATE_RANGE_TYPE_NAME};
pub use error::{Error, ErrorKind, Result};
pub use model::{Bound, DateRange, Moment, Precision, Role, Timestamp, TimestampTrait};
