use thiserror::Error;

use crate::{Sequence, ThreeWay};

/// Error returned by [`check_sorted`] when two adjacent elements are out of
/// order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("sequence is not sorted: element {index} is greater than element {}", .index + 1)]
pub struct Unsorted {
	/// Position of the first element greater than its successor.
	pub index: usize,
}

/// Checks that `sequence` is sorted according to `cmp`.
///
/// Equal neighbours are accepted. This is a debugging aid: [`search`] never
/// calls it.
///
/// [`search`]: crate::search
pub fn check_sorted<S, O>(sequence: &S, cmp: impl Fn(&S::Item, &S::Item) -> O) -> Result<(), Unsorted>
where
	S: Sequence + ?Sized,
	O: ThreeWay,
{
	let mut previous = match sequence.get(0) {
		Some(item) => item,
		None => return Ok(()),
	};

	for index in 1..sequence.len() {
		let Some(item) = sequence.get(index) else {
			break;
		};

		if cmp(previous, item).ordering().is_gt() {
			let err = Unsorted { index: index - 1 };
			debug!("{}", err);
			return Err(err);
		}

		previous = item;
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare_numbers;

	#[test]
	fn sorted() {
		assert_eq!(check_sorted(&[1, 2, 2, 5], compare_numbers), Ok(()));
		assert_eq!(check_sorted(&Vec::<u8>::new(), compare_numbers), Ok(()));
		assert_eq!(check_sorted(&[7], compare_numbers), Ok(()));
	}

	#[test]
	fn unsorted() {
		let err = check_sorted(&[1, 3, 2, 0], compare_numbers).unwrap_err();
		assert_eq!(err, Unsorted { index: 1 });
		assert_eq!(
			err.to_string(),
			"sequence is not sorted: element 1 is greater than element 2"
		);
	}

	#[test]
	fn descending_with_integer_comparator() {
		let items = [9, 4, 4, 1];
		assert_eq!(check_sorted(&items, |a: &i32, b: &i32| b - a), Ok(()));
		assert!(check_sorted(&items, |a: &i32, b: &i32| a - b).is_err());
	}
}
