//! A module containing [`BoundSet`].

/// The set of flags describing the two bounds of an interval: whether
/// each side is open and whether each side is infinite.
///
/// Each flag is an independent named field rather than a bit in a
/// flags-mask, so an accessor can never be wired to the wrong bit.
///
/// The [`Default`] value has every flag unset, which describes a
/// finite interval closed on both sides.
///
/// # Examples
/// ```
/// use ordit::BoundSet;
///
/// let bounds = BoundSet::new(true, false, false, true);
///
/// assert_eq!(bounds.is_left_open(), true);
/// assert_eq!(bounds.is_right_open(), false);
/// assert_eq!(bounds.is_left_infinite(), false);
/// assert_eq!(bounds.is_right_infinite(), true);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoundSet {
	left_open: bool,
	right_open: bool,
	left_infinite: bool,
	right_infinite: bool,
}

impl BoundSet {
	/// Creates a new `BoundSet` from the four flags directly, in the
	/// order: left-open, right-open, left-infinite, right-infinite.
	///
	/// There is no derived state and no invalid combination, any mix of
	/// flags is representable. Whether the described interval is valid
	/// is decided by [`Interval::new`] against the bound values.
	///
	/// [`Interval::new`]: crate::Interval::new
	///
	/// # Examples
	/// ```
	/// use ordit::BoundSet;
	///
	/// // the bounds of [x, y)
	/// let bounds = BoundSet::new(false, true, false, false);
	///
	/// assert_eq!(bounds.is_right_open(), true);
	/// ```
	pub fn new(
		left_open: bool,
		right_open: bool,
		left_infinite: bool,
		right_infinite: bool,
	) -> BoundSet {
		BoundSet {
			left_open,
			right_open,
			left_infinite,
			right_infinite,
		}
	}

	/// Returns `true` if the left bound value is excluded from the
	/// interval.
	pub fn is_left_open(&self) -> bool {
		self.left_open
	}

	/// Returns `true` if the right bound value is excluded from the
	/// interval.
	pub fn is_right_open(&self) -> bool {
		self.right_open
	}

	/// Returns `true` if the interval extends without limit on the
	/// left.
	pub fn is_left_infinite(&self) -> bool {
		self.left_infinite
	}

	/// Returns `true` if the interval extends without limit on the
	/// right.
	pub fn is_right_infinite(&self) -> bool {
		self.right_infinite
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn accessors_echo_construction() {
		for left_open in [false, true] {
			for right_open in [false, true] {
				for left_infinite in [false, true] {
					for right_infinite in [false, true] {
						let bounds = BoundSet::new(
							left_open,
							right_open,
							left_infinite,
							right_infinite,
						);

						assert_eq!(bounds.is_left_open(), left_open);
						assert_eq!(bounds.is_right_open(), right_open);
						assert_eq!(bounds.is_left_infinite(), left_infinite);
						assert_eq!(bounds.is_right_infinite(), right_infinite);
					}
				}
			}
		}
	}

	//each right-hand flag on its own must not leak into the other
	//right-hand accessor
	#[test]
	fn right_flags_are_independent() {
		let open_only = BoundSet::new(false, true, false, false);
		assert_eq!(open_only.is_right_open(), true);
		assert_eq!(open_only.is_right_infinite(), false);

		let infinite_only = BoundSet::new(false, false, false, true);
		assert_eq!(infinite_only.is_right_open(), false);
		assert_eq!(infinite_only.is_right_infinite(), true);
	}

	#[test]
	fn default_is_finite_and_closed() {
		let bounds = BoundSet::default();

		assert_eq!(bounds.is_left_open(), false);
		assert_eq!(bounds.is_right_open(), false);
		assert_eq!(bounds.is_left_infinite(), false);
		assert_eq!(bounds.is_right_infinite(), false);
	}
}
