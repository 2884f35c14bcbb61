/// A position in the text, measured in characters (not bytes).
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
///
/// This is distinct from CharIdx to avoid accidentally passing an index
/// where a length is expected or vice versa.
pub type CharLen = usize;


/// The active caret or highlighted range of a text field.
///
/// Bounds are character offsets with `start <= end`. A selection with
/// `start == end` is a caret. Constructors normalize reversed bounds, so the
/// ordering invariant holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
	start: CharIdx,
	end: CharIdx,
}

impl Selection {
	/// Creates a selection spanning `a..b`, in either order.
	pub fn new(a: CharIdx, b: CharIdx) -> Self {
		Self {
			start: a.min(b),
			end: a.max(b),
		}
	}

	/// Creates a collapsed selection (caret) at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the inclusive start offset.
	#[inline]
	pub fn start(&self) -> CharIdx {
		self.start
	}

	/// Returns the exclusive end offset.
	#[inline]
	pub fn end(&self) -> CharIdx {
		self.end
	}

	/// Returns the number of selected characters.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.end - self.start
	}

	/// Returns true for a caret (nothing highlighted).
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Applies a function to both bounds, renormalizing the result.
	pub fn map(self, mut f: impl FnMut(CharIdx) -> CharIdx) -> Self {
		Self::new(f(self.start), f(self.end))
	}

	/// Clamps both bounds to `[0, max_char]`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self {
			start: self.start.min(max_char),
			end: self.end.min(max_char),
		}
	}
}
