//! Plain-text helpers
//!
//! Word wrapping and publication date rendering. Both are pure functions
//! with no styling applied.

pub mod date;
pub mod wrap;

pub use date::{format_date, parse_timestamp, DATE_UNAVAILABLE};
pub use wrap::wrap;
