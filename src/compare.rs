use std::cmp::Ordering;

/// Three-way comparison result.
///
/// A comparator may return an [`Ordering`] or a signed integer, where a
/// negative value means "less than", zero "equal" and a positive value
/// "greater than".
pub trait ThreeWay {
	/// Reads this value as an [`Ordering`].
	fn ordering(self) -> Ordering;
}

impl ThreeWay for Ordering {
	#[inline]
	fn ordering(self) -> Ordering {
		self
	}
}

macro_rules! signed_three_way {
	($($ty:ty),*) => {
		$(
			impl ThreeWay for $ty {
				#[inline]
				fn ordering(self) -> Ordering {
					self.cmp(&0)
				}
			}
		)*
	};
}

signed_three_way!(i8, i16, i32, i64, i128, isize);

/// Compares two numbers.
///
/// Values that are neither smaller nor greater than each other (such as a NaN
/// and anything else) compare equal.
#[inline]
pub fn compare_numbers<N: PartialOrd>(a: &N, b: &N) -> Ordering {
	if a < b {
		Ordering::Less
	} else if a > b {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numbers() {
		assert_eq!(compare_numbers(&1, &2), Ordering::Less);
		assert_eq!(compare_numbers(&2, &2), Ordering::Equal);
		assert_eq!(compare_numbers(&3, &2), Ordering::Greater);
		assert_eq!(compare_numbers(&-0.5, &0.25), Ordering::Less);
		assert_eq!(compare_numbers(&0.0, &-0.0), Ordering::Equal);
		assert_eq!(compare_numbers(&f64::NAN, &1.0), Ordering::Equal);
	}

	#[test]
	fn integer_sign() {
		assert_eq!((-1i32).ordering(), Ordering::Less);
		assert_eq!(0i8.ordering(), Ordering::Equal);
		assert_eq!(42isize.ordering(), Ordering::Greater);
		assert_eq!(i64::MIN.ordering(), Ordering::Less);
		assert_eq!(Ordering::Greater.ordering(), Ordering::Greater);
	}
}
