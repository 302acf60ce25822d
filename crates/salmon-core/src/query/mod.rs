//! Filtering and aggregation over decoded shifts.
//!
//! Filters take a slice of shifts and return a new vector holding copies of
//! the matching ones in source order; the source is never modified. Filters
//! can be chained, or combined up front with [`Filter::All`] and
//! [`Filter::Any`].

mod aggregate;
mod filter;

pub use aggregate::*;
pub use filter::*;
