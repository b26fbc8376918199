//! This crate provides [`Interval`], a generic interval over any
//! totally ordered value type, with independently open, closed or
//! infinite bounds and a symmetric overlap predicate.
//!
//! It is aimed at libraries that reason about ranges, numeric ranges,
//! time windows, version ranges, without re-deriving
//! boundary-condition logic each time. Collections of intervals
//! (trees, maps, merging) and interval arithmetic are deliberately not
//! part of this crate, they are meant to be built on top of it.
//!
//! ## Example
//!
//! ```rust
//! use ordit::interval::{ie, ii, ui};
//!
//! let q1 = ii(1, 90).unwrap();
//! let q2 = ie(91, 181).unwrap();
//! let history = ui(45);
//!
//! assert_eq!(q1.overlaps(&q2), false);
//! assert_eq!(q1.overlaps(&history), true);
//!
//! assert_eq!(history.to_string(), "]-∞,45]");
//! ```
//!
//! ## Example using a custom interval type
//!
//! Any type can take part in overlap testing by implementing
//! [`IntervalBounds`], including against [`Interval`]s of a different
//! concrete type.
//!
//! ```rust
//! use ordit::interval::ii;
//! use ordit::IntervalBounds;
//!
//! // a half-open session slot, [start, end)
//! struct Slot {
//! 	start: u32,
//! 	end: u32,
//! }
//!
//! impl IntervalBounds<u32> for Slot {
//! 	fn left(&self) -> &u32 {
//! 		&self.start
//! 	}
//! 	fn right(&self) -> &u32 {
//! 		&self.end
//! 	}
//! 	fn is_left_open(&self) -> bool {
//! 		false
//! 	}
//! 	fn is_right_open(&self) -> bool {
//! 		true
//! 	}
//! 	fn is_left_infinite(&self) -> bool {
//! 		false
//! 	}
//! 	fn is_right_infinite(&self) -> bool {
//! 		false
//! 	}
//! }
//!
//! let slot = Slot { start: 900, end: 930 };
//!
//! assert_eq!(slot.overlaps(&ii(930, 960).unwrap()), false);
//! assert_eq!(slot.overlaps(&ii(929, 960).unwrap()), true);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Bounds
//!
//! Each side of an interval is described by a value, an open/closed
//! flag and an infinite flag, collected in a [`BoundSet`]. An open
//! bound excludes its value, a closed bound includes it, and an
//! infinite bound has no limiting value at all. The value stored on an
//! infinite side is a placeholder and is never read by any operation.
//!
//! ### Invalid Intervals
//!
//! Within this crate, not all bound combinations are considered valid
//! intervals, and invalid ones are unrepresentable: construction fails
//! instead of producing a value. An interval is valid only if it
//! contains at least one point, so there is no empty-interval state.
//!
//! Here are a few examples of intervals and whether they are valid:
//!
//! | interval   | valid |
//! | ---------- | ----- |
//! | `[0,5]`    | YES   |
//! | `[5,5]`    | YES   |
//! | `(5,5]`    | NO    |
//! | `(5,5)`    | NO    |
//! | `[9,8]`    | NO    |
//! | `(-∞,+∞)`  | YES   |
//!
//! The two failure kinds are [`IntervalError::InvalidBounds`] for
//! finite bounds with the right below the left, and
//! [`IntervalError::DegenerateSingleton`] for equal bounds with an
//! open side.
//!
//! ### Overlap
//!
//! Two intervals are "overlapping" if there exists a point that is
//! contained within both intervals. Touching at a shared bound value
//! only counts when both touching sides are closed: `[1,5]` overlaps
//! `[5,10]` but `[1,5)` does not. The predicate is symmetric by
//! construction, it is a conjunction of the same no-gap test applied
//! both ways around.
//!
//! ### Generic points
//!
//! The point type `T` only needs [`Ord`], a total order. Dates,
//! version identifiers and other custom comparable domain values work
//! the same as numbers.
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>

#![allow(clippy::tabs_in_doc_comments)]

pub mod bound_set;
pub mod interval;
pub(crate) mod utils;

pub use crate::bound_set::BoundSet;
pub use crate::interval::{Interval, IntervalBounds, IntervalError};
