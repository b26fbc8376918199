//! A module containing [`Interval`], its [`IntervalBounds`] capability
//! trait and its constructor functions.

use core::cmp::Ordering;
use core::fmt;

use thiserror::Error;

use crate::bound_set::BoundSet;
use crate::utils;

/// The error returned when constructing an interval whose bounds do
/// not describe a valid interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
	/// Both sides were finite and the right bound was less than the
	/// left bound.
	#[error("the right bound is less than the left bound")]
	InvalidBounds,
	/// Both finite bounds were equal and at least one side was open,
	/// which would describe an interval containing no points.
	#[error("equal bounds cannot have an open side")]
	DegenerateSingleton,
}

/// The capability trait for types which describe an interval with
/// open, closed or infinite bounds over an ordered point type `T`.
///
/// [`Interval`] implements this trait, but any type with its own
/// interval representation can implement it too and take part in
/// overlap testing, including against intervals of a different
/// concrete type. See the crate-level documentation for a worked
/// example.
///
/// The value returned by [`left()`](IntervalBounds::left) or
/// [`right()`](IntervalBounds::right) for an infinite side is never
/// read by any operation, implementations may return any placeholder.
pub trait IntervalBounds<T> {
	/// Returns the left bound value.
	fn left(&self) -> &T;

	/// Returns the right bound value.
	fn right(&self) -> &T;

	/// Returns `true` if the left bound value is excluded from the
	/// interval.
	fn is_left_open(&self) -> bool;

	/// Returns `true` if the right bound value is excluded from the
	/// interval.
	fn is_right_open(&self) -> bool;

	/// Returns `true` if the interval extends without limit on the
	/// left.
	fn is_left_infinite(&self) -> bool;

	/// Returns `true` if the interval extends without limit on the
	/// right.
	fn is_right_infinite(&self) -> bool;

	/// Returns `true` if the two intervals share at least one point.
	///
	/// Touching at a shared bound value only counts as overlap if both
	/// touching sides are closed. An infinite side extends past every
	/// bound of the other interval.
	///
	/// The predicate is symmetric: `a.overlaps(&b) == b.overlaps(&a)`
	/// for all valid intervals `a` and `b`. It cannot fail, the
	/// argument is a non-null reference by construction.
	///
	/// # Examples
	/// ```
	/// use ordit::interval::{ie, ii, uu};
	///
	/// let a = ii(1, 5).unwrap();
	///
	/// assert_eq!(a.overlaps(&ii(5, 10).unwrap()), true);
	/// assert_eq!(a.overlaps(&ii(6, 10).unwrap()), false);
	///
	/// // the touching side of [1, 5) is open, so 5 is not shared
	/// assert_eq!(ie(1, 5).unwrap().overlaps(&ii(5, 10).unwrap()), false);
	///
	/// // an unbounded interval overlaps every valid interval
	/// assert_eq!(uu::<i32>().overlaps(&a), true);
	/// ```
	fn overlaps<Q>(&self, other: &Q) -> bool
	where
		T: Ord,
		Q: IntervalBounds<T> + ?Sized,
	{
		utils::overlaps(self, other)
	}
}

/// An immutable interval over any totally ordered point type `T`, with
/// each side independently open or closed and finite or infinite.
///
/// Construction through [`Interval::new`] (or the constructor
/// functions of this module) validates the bounds, so every live
/// `Interval` is well-formed. All operations afterwards are pure
/// reads.
///
/// # Examples
/// ```
/// use ordit::interval::{ii, iu};
///
/// let window = ii("2024-01-01", "2024-06-30").unwrap();
/// let open_ended = iu("2024-06-30");
///
/// assert_eq!(window.overlaps(&open_ended), true);
/// assert_eq!(window.to_string(), "[2024-01-01,2024-06-30]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
	left: T,
	right: T,
	bounds: BoundSet,
}

impl<T> Interval<T>
where
	T: Ord,
{
	/// Creates a new `Interval` from its two bound values and a
	/// [`BoundSet`], validating that they describe a non-empty
	/// interval.
	///
	/// Validation applies only when neither side is infinite, an
	/// infinite side's value is stored untouched as a placeholder and
	/// never read again.
	///
	/// On success every accessor returns exactly the value and flags
	/// supplied here, nothing is normalized.
	///
	/// # Errors
	///
	/// Returns [`IntervalError::InvalidBounds`] if both sides are
	/// finite and `right < left`, and
	/// [`IntervalError::DegenerateSingleton`] if both finite bounds
	/// are equal and either side is open.
	///
	/// # Examples
	/// ```
	/// use ordit::{BoundSet, Interval, IntervalError};
	///
	/// // [1, 5)
	/// let interval =
	/// 	Interval::new(1, 5, BoundSet::new(false, true, false, false)).unwrap();
	/// assert_eq!(*interval.right(), 5);
	///
	/// assert_eq!(
	/// 	Interval::new(5, 1, BoundSet::default()),
	/// 	Err(IntervalError::InvalidBounds)
	/// );
	/// assert_eq!(
	/// 	Interval::new(3, 3, BoundSet::new(true, false, false, false)),
	/// 	Err(IntervalError::DegenerateSingleton)
	/// );
	/// ```
	pub fn new(
		left: T,
		right: T,
		bounds: BoundSet,
	) -> Result<Interval<T>, IntervalError> {
		if !bounds.is_left_infinite() && !bounds.is_right_infinite() {
			match left.cmp(&right) {
				Ordering::Greater => return Err(IntervalError::InvalidBounds),
				Ordering::Equal => {
					if bounds.is_left_open() || bounds.is_right_open() {
						return Err(IntervalError::DegenerateSingleton);
					}
				}
				Ordering::Less => {}
			}
		}

		Ok(Interval {
			left,
			right,
			bounds,
		})
	}

	/// Returns the left bound value.
	///
	/// If the left side is infinite this is the stored placeholder and
	/// carries no meaning.
	pub fn left(&self) -> &T {
		&self.left
	}

	/// Returns the right bound value.
	///
	/// If the right side is infinite this is the stored placeholder
	/// and carries no meaning.
	pub fn right(&self) -> &T {
		&self.right
	}

	/// Returns the [`BoundSet`] describing the two sides of the
	/// interval.
	pub fn bound_set(&self) -> BoundSet {
		self.bounds
	}

	/// Returns `true` if the left bound value is excluded from the
	/// interval.
	pub fn is_left_open(&self) -> bool {
		self.bounds.is_left_open()
	}

	/// Returns `true` if the right bound value is excluded from the
	/// interval.
	pub fn is_right_open(&self) -> bool {
		self.bounds.is_right_open()
	}

	/// Returns `true` if the interval extends without limit on the
	/// left.
	pub fn is_left_infinite(&self) -> bool {
		self.bounds.is_left_infinite()
	}

	/// Returns `true` if the interval extends without limit on the
	/// right.
	pub fn is_right_infinite(&self) -> bool {
		self.bounds.is_right_infinite()
	}

	/// Returns `true` if the two intervals share at least one point.
	///
	/// See [`IntervalBounds::overlaps`], which this forwards to, for
	/// the full semantics. The `other` interval may be any type
	/// implementing [`IntervalBounds`] over the same point type.
	///
	/// # Examples
	/// ```
	/// use ordit::interval::{ii, ui};
	///
	/// let a = ii(1, 5).unwrap();
	///
	/// assert_eq!(a.overlaps(&ui(3)), true);
	/// assert_eq!(a.overlaps(&ii(3, 3).unwrap()), true);
	/// ```
	pub fn overlaps<Q>(&self, other: &Q) -> bool
	where
		Q: IntervalBounds<T> + ?Sized,
	{
		utils::overlaps(self, other)
	}
}

impl<T> IntervalBounds<T> for Interval<T> {
	fn left(&self) -> &T {
		&self.left
	}

	fn right(&self) -> &T {
		&self.right
	}

	fn is_left_open(&self) -> bool {
		self.bounds.is_left_open()
	}

	fn is_right_open(&self) -> bool {
		self.bounds.is_right_open()
	}

	fn is_left_infinite(&self) -> bool {
		self.bounds.is_left_infinite()
	}

	fn is_right_infinite(&self) -> bool {
		self.bounds.is_right_infinite()
	}
}

/// The canonical text form `{L}{left},{right}{R}` where `{L}` is `[`
/// for a closed left side and `]` for an open one, and `{R}` is `]`
/// for a closed right side and `[` for an open one. An infinite side
/// renders as `-∞` or `+∞` in place of its value.
///
/// Purely presentational, the notation has no effect on overlap
/// semantics.
///
/// # Examples
/// ```
/// use ordit::interval::{ee, ii, ui};
///
/// assert_eq!(ii(1, 5).unwrap().to_string(), "[1,5]");
/// assert_eq!(ee(1, 5).unwrap().to_string(), "]1,5[");
/// assert_eq!(ui(5).to_string(), "]-∞,5]");
/// ```
impl<T> fmt::Display for Interval<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let left_bracket = if self.bounds.is_left_open() { ']' } else { '[' };
		let right_bracket = if self.bounds.is_right_open() { '[' } else { ']' };

		write!(f, "{left_bracket}")?;
		if self.bounds.is_left_infinite() {
			f.write_str("-∞")?;
		} else {
			write!(f, "{}", self.left)?;
		}
		f.write_str(",")?;
		if self.bounds.is_right_infinite() {
			f.write_str("+∞")?;
		} else {
			write!(f, "{}", self.right)?;
		}
		write!(f, "{right_bracket}")
	}
}

/// A closed-closed interval `[left, right]`.
///
/// # Errors
///
/// The same validation as [`Interval::new`].
///
/// # Examples
/// ```
/// use ordit::interval::ii;
///
/// let singleton = ii(3, 3).unwrap();
/// assert_eq!(singleton.overlaps(&singleton), true);
/// ```
pub fn ii<T>(left: T, right: T) -> Result<Interval<T>, IntervalError>
where
	T: Ord,
{
	Interval::new(left, right, BoundSet::new(false, false, false, false))
}

/// A closed-open interval `[left, right)`.
///
/// # Errors
///
/// The same validation as [`Interval::new`].
pub fn ie<T>(left: T, right: T) -> Result<Interval<T>, IntervalError>
where
	T: Ord,
{
	Interval::new(left, right, BoundSet::new(false, true, false, false))
}

/// An open-closed interval `(left, right]`.
///
/// # Errors
///
/// The same validation as [`Interval::new`].
pub fn ei<T>(left: T, right: T) -> Result<Interval<T>, IntervalError>
where
	T: Ord,
{
	Interval::new(left, right, BoundSet::new(true, false, false, false))
}

/// An open-open interval `(left, right)`.
///
/// # Errors
///
/// The same validation as [`Interval::new`].
pub fn ee<T>(left: T, right: T) -> Result<Interval<T>, IntervalError>
where
	T: Ord,
{
	Interval::new(left, right, BoundSet::new(true, true, false, false))
}

/// An infinite-closed interval `(-∞, right]`.
///
/// The infinite side is open, an infinite bound value is never
/// attained. The left placeholder is cloned from `right` and never
/// read.
pub fn ui<T>(right: T) -> Interval<T>
where
	T: Ord + Clone,
{
	Interval {
		left: right.clone(),
		right,
		bounds: BoundSet::new(true, false, true, false),
	}
}

/// An infinite-open interval `(-∞, right)`.
///
/// The left placeholder is cloned from `right` and never read.
pub fn ue<T>(right: T) -> Interval<T>
where
	T: Ord + Clone,
{
	Interval {
		left: right.clone(),
		right,
		bounds: BoundSet::new(true, true, true, false),
	}
}

/// A closed-infinite interval `[left, +∞)`.
///
/// The right placeholder is cloned from `left` and never read.
pub fn iu<T>(left: T) -> Interval<T>
where
	T: Ord + Clone,
{
	Interval {
		right: left.clone(),
		left,
		bounds: BoundSet::new(false, true, false, true),
	}
}

/// An open-infinite interval `(left, +∞)`.
///
/// The right placeholder is cloned from `left` and never read.
pub fn eu<T>(left: T) -> Interval<T>
where
	T: Ord + Clone,
{
	Interval {
		right: left.clone(),
		left,
		bounds: BoundSet::new(true, true, false, true),
	}
}

/// The fully unbounded interval `(-∞, +∞)`.
///
/// Both placeholders are [`Default`] values and never read.
///
/// # Examples
/// ```
/// use ordit::interval::{ii, uu};
///
/// assert_eq!(uu::<i32>().overlaps(&ii(100, 100).unwrap()), true);
/// ```
pub fn uu<T>() -> Interval<T>
where
	T: Ord + Default,
{
	Interval {
		left: T::default(),
		right: T::default(),
		bounds: BoundSet::new(true, true, true, true),
	}
}
