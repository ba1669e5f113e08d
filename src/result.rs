use std::fmt;

/// Index reported when no element matches the target.
///
/// This is not an insertion point.
pub const NOT_FOUND: isize = -1;

/// Outcome of a search.
///
/// If `value` is `Some`, `index` is the in-bounds position of that element in
/// the searched sequence. Otherwise `index` is [`NOT_FOUND`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchResult<V> {
	/// Matching element, if any.
	pub value: Option<V>,

	/// Position of the matching element, or [`NOT_FOUND`].
	pub index: isize,
}

impl<V> SearchResult<V> {
	/// Builds the result of a match at `index`.
	///
	/// An `index` above `isize::MAX` cannot be reported and gives a not-found
	/// result.
	#[inline]
	pub fn found(value: V, index: usize) -> Self {
		match isize::try_from(index) {
			Ok(index) => Self {
				value: Some(value),
				index,
			},
			Err(_) => Self::not_found(),
		}
	}

	#[inline]
	pub fn not_found() -> Self {
		Self {
			value: None,
			index: NOT_FOUND,
		}
	}

	#[inline]
	pub fn is_found(&self) -> bool {
		self.value.is_some()
	}

	/// Returns the index of the match as a position in the sequence.
	#[inline]
	pub fn position(&self) -> Option<usize> {
		usize::try_from(self.index)
			.ok()
			.filter(|_| self.value.is_some())
	}

	#[inline]
	pub fn into_option(self) -> Option<(usize, V)> {
		let index = usize::try_from(self.index).ok()?;
		self.value.map(|value| (index, value))
	}

	#[inline]
	pub fn as_ref(&self) -> SearchResult<&V> {
		SearchResult {
			value: self.value.as_ref(),
			index: self.index,
		}
	}

	/// Maps the found value, leaving the index untouched.
	#[inline]
	pub fn map<U>(self, f: impl FnOnce(V) -> U) -> SearchResult<U> {
		SearchResult {
			value: self.value.map(f),
			index: self.index,
		}
	}
}

impl<'a, V: Clone> SearchResult<&'a V> {
	#[inline]
	pub fn cloned(self) -> SearchResult<V> {
		self.map(V::clone)
	}
}

impl<'a, V: Copy> SearchResult<&'a V> {
	#[inline]
	pub fn copied(self) -> SearchResult<V> {
		self.map(|v| *v)
	}
}

impl<V> Default for SearchResult<V> {
	fn default() -> Self {
		Self::not_found()
	}
}

impl<V> From<SearchResult<V>> for Option<(usize, V)> {
	fn from(r: SearchResult<V>) -> Self {
		r.into_option()
	}
}

impl<V: fmt::Debug> fmt::Debug for SearchResult<V> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match &self.value {
			Some(value) => write!(f, "{{ value: {:?}, index: {} }}", value, self.index),
			None => write!(f, "{{ value: null, index: {} }}", self.index),
		}
	}
}

impl<V: fmt::Display> fmt::Display for SearchResult<V> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match &self.value {
			Some(value) => write!(f, "{} at {}", value, self.index),
			None => write!(f, "not found ({})", self.index),
		}
	}
}
