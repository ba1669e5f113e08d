//! This library provides a [`search`] function performing a binary search over
//! a sorted sequence, where the searched key may have a different type than
//! the elements of the sequence.
//!
//! The only link between the element type and the key type is the comparator.
//! This allows looking up a record with a partial key, without building a
//! complete dummy record.
//!
//! ```
//! use partial_search::search;
//!
//! struct User {
//! 	id: u32,
//! 	name: &'static str,
//! }
//!
//! let users = [
//! 	User { id: 1, name: "Alice" },
//! 	User { id: 2, name: "Bob" },
//! 	User { id: 3, name: "Charlie" },
//! ];
//!
//! let r = search(&users, &2, |user: &User, id: &u32| user.id.cmp(id));
//! assert_eq!(r.value.map(|u| u.name), Some("Bob"));
//! assert_eq!(r.index, 1);
//!
//! let r = search(&users, &4, |user: &User, id: &u32| user.id.cmp(id));
//! assert!(r.value.is_none());
//! assert_eq!(r.index, -1);
//! ```
//!
//! The sequence must already be sorted consistently with the comparator. This
//! is never checked by the search; [`check_sorted`] can be used to verify it
//! when debugging.
//!
//! Enabling the `log` feature makes the search report its outcome through the
//! [`log`](https://docs.rs/log) facade.
use std::{cmp::Ordering, convert::Infallible};

macro_rules! trace {
	($($arg:tt)*) => {{
		#[cfg(feature = "log")]
		log::trace!($($arg)*);
	}};
}

macro_rules! debug {
	($($arg:tt)*) => {{
		#[cfg(feature = "log")]
		log::debug!($($arg)*);
	}};
}

mod compare;
mod result;
mod sequence;
mod validate;

pub use compare::{compare_numbers, ThreeWay};
pub use result::{SearchResult, NOT_FOUND};
pub use sequence::Sequence;
pub use validate::{check_sorted, Unsorted};

/// Searches the sorted `sequence` for an element matching `target`.
///
/// `cmp(element, target)` must return "less" when `element` comes before the
/// target in the order of the sequence, "equal" when it matches and "greater"
/// when it comes after. It may return an [`Ordering`] or a signed integer
/// (see [`ThreeWay`]).
///
/// On success the result holds a reference to the matching element and its
/// index. Otherwise the value is `None` and the index is [`NOT_FOUND`], which
/// is not an insertion point.
///
/// If several elements match, the one returned is the first met by the
/// bisection, which is not necessarily the leftmost or the rightmost one.
///
/// If `sequence` is not sorted, the result is unspecified but the search
/// still terminates.
///
/// Positions must fit in an `isize`: a sequence longer than `isize::MAX`
/// elements is never searched and always gives a not-found result.
#[inline]
pub fn search<'a, S, T, O>(
	sequence: &'a S,
	target: &T,
	cmp: impl Fn(&S::Item, &T) -> O,
) -> SearchResult<&'a S::Item>
where
	S: Sequence + ?Sized,
	T: ?Sized,
	O: ThreeWay,
{
	match bisect(sequence, |item| Ok::<_, Infallible>(cmp(item, target).ordering())) {
		Ok(r) => r,
		Err(e) => match e {},
	}
}

/// Searches the sorted `sequence` with a fallible comparator.
///
/// Behaves like [`search`], except that the first error returned by `cmp`
/// ends the search and is returned as is.
#[inline]
pub fn try_search<'a, S, T, O, E>(
	sequence: &'a S,
	target: &T,
	cmp: impl Fn(&S::Item, &T) -> Result<O, E>,
) -> Result<SearchResult<&'a S::Item>, E>
where
	S: Sequence + ?Sized,
	T: ?Sized,
	O: ThreeWay,
{
	bisect(sequence, |item| cmp(item, target).map(O::ordering))
}

/// Searches `sequence`, sorted by the key extracted with `f`, for the element
/// whose key equals `key`.
#[inline]
pub fn search_by_key<'a, S, K>(
	sequence: &'a S,
	key: &K,
	f: impl Fn(&S::Item) -> K,
) -> SearchResult<&'a S::Item>
where
	S: Sequence + ?Sized,
	K: Ord,
{
	search(sequence, key, |item, key| f(item).cmp(key))
}

/// Closed-range bisection shared by all the searches.
fn bisect<'a, S, E>(
	sequence: &'a S,
	mut probe: impl FnMut(&S::Item) -> Result<Ordering, E>,
) -> Result<SearchResult<&'a S::Item>, E>
where
	S: Sequence + ?Sized,
{
	let len = sequence.len();
	if len == 0 {
		trace!("search in empty sequence");
		return Ok(SearchResult::not_found());
	}

	if isize::try_from(len).is_err() {
		trace!("sequence of length {} is too long to be searched", len);
		return Ok(SearchResult::not_found());
	}

	// invariant: a match, if any, lies in `left..=right`.
	let mut left = 0;
	let mut right = len - 1;

	while left <= right {
		let mid = left + (right - left) / 2;
		let Some(item) = sequence.get(mid) else {
			break;
		};

		match probe(item)? {
			Ordering::Equal => {
				trace!("found match at {} in sequence of length {}", mid, len);
				return Ok(SearchResult::found(item, mid));
			}
			Ordering::Less => left = mid + 1,
			Ordering::Greater => {
				if mid == 0 {
					break;
				}

				right = mid - 1
			}
		}
	}

	trace!("no match in sequence of length {}", len);
	Ok(SearchResult::not_found())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn probes_midpoint_first() {
		let items = [1, 2, 2, 2, 3];
		let r = search(&items, &2, compare_numbers);
		assert_eq!(r.index, 2);
	}

	#[test]
	fn lower_end() {
		let items = [10u8, 20, 30];
		let r = search(&items, &5, compare_numbers);
		assert_eq!(r, SearchResult::not_found());
		assert_eq!(search(&items, &10, compare_numbers).position(), Some(0));
	}

	#[test]
	fn comparator_error_is_returned() {
		let items = [1, 2, 3];
		let r: Result<_, &str> = try_search(&items, &2, |_: &i32, _: &i32| Err::<Ordering, _>("boom"));
		assert_eq!(r, Err("boom"));
	}
}
