use std::collections::VecDeque;

/// Zero-based, randomly indexable sequence.
///
/// Searches only handle sequences of at most `isize::MAX` elements.
pub trait Sequence {
	/// Element type.
	type Item;

	fn len(&self) -> usize;

	fn get(&self, index: usize) -> Option<&Self::Item>;

	#[inline]
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<A> Sequence for [A] {
	type Item = A;

	#[inline]
	fn len(&self) -> usize {
		<[A]>::len(self)
	}

	#[inline]
	fn get(&self, index: usize) -> Option<&A> {
		<[A]>::get(self, index)
	}
}

impl<A, const N: usize> Sequence for [A; N] {
	type Item = A;

	#[inline]
	fn len(&self) -> usize {
		N
	}

	#[inline]
	fn get(&self, index: usize) -> Option<&A> {
		self.as_slice().get(index)
	}
}

impl<A> Sequence for Vec<A> {
	type Item = A;

	#[inline]
	fn len(&self) -> usize {
		Vec::len(self)
	}

	#[inline]
	fn get(&self, index: usize) -> Option<&A> {
		self.as_slice().get(index)
	}
}

impl<A> Sequence for VecDeque<A> {
	type Item = A;

	#[inline]
	fn len(&self) -> usize {
		VecDeque::len(self)
	}

	#[inline]
	fn get(&self, index: usize) -> Option<&A> {
		VecDeque::get(self, index)
	}
}
