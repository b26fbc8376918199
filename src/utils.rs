use core::cmp::Ordering;

use crate::interval::IntervalBounds;

/// Returns `true` if `a` does not end strictly before `b` begins.
///
/// Holds trivially when `a` is right-infinite or `b` is left-infinite.
/// When the two bounds meet at the same value the shared point only
/// joins the intervals if both touching sides are closed.
pub(crate) fn gapless_before<T, A, B>(a: &A, b: &B) -> bool
where
	T: Ord,
	A: IntervalBounds<T> + ?Sized,
	B: IntervalBounds<T> + ?Sized,
{
	if a.is_right_infinite() || b.is_left_infinite() {
		return true;
	}

	match a.right().cmp(b.left()) {
		Ordering::Greater => true,
		Ordering::Equal => !a.is_right_open() && !b.is_left_open(),
		Ordering::Less => false,
	}
}

/// Returns `true` if the two intervals share at least one point.
///
/// Two intervals overlap unless one ends strictly before the other
/// begins, so the predicate is a conjunction of [`gapless_before`] both
/// ways around and is symmetric by construction.
pub(crate) fn overlaps<T, A, B>(a: &A, b: &B) -> bool
where
	T: Ord,
	A: IntervalBounds<T> + ?Sized,
	B: IntervalBounds<T> + ?Sized,
{
	gapless_before(a, b) && gapless_before(b, a)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::{ie, ii, iu, ui};

	#[test]
	fn gapless_before_on_touching_bounds() {
		//both touching sides closed, the shared point joins them
		assert_eq!(gapless_before(&ii(1, 5).unwrap(), &ii(5, 10).unwrap()), true);
		//the touching side of the left interval is open
		assert_eq!(
			gapless_before(&ie(1, 5).unwrap(), &ii(5, 10).unwrap()),
			false
		);
	}

	#[test]
	fn gapless_before_on_infinite_sides() {
		//a right-infinite interval never ends
		assert_eq!(gapless_before(&iu(100), &ii(1, 2).unwrap()), true);
		//a left-infinite interval begins before anything ends
		assert_eq!(gapless_before(&ii(1, 2).unwrap(), &ui(-100)), true);
	}

	#[test]
	fn gapless_before_on_strict_gap() {
		assert_eq!(
			gapless_before(&ii(1, 2).unwrap(), &ii(3, 4).unwrap()),
			false
		);
		assert_eq!(gapless_before(&ii(3, 4).unwrap(), &ii(1, 2).unwrap()), true);
	}
}
