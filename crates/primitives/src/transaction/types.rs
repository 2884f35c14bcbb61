use crate::selection::{CharIdx, CharLen};

/// Replacement text carried by a change.
pub type Tendril = String;

/// Represents a single text change operation.
///
/// A change describes replacing the text range `[start, end)` with the optional
/// `replacement` text. If `replacement` is [`None`], this represents a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
	/// The starting character index of the change.
	pub start: CharIdx,
	/// The ending character index of the change (exclusive).
	pub end: CharIdx,
	/// The replacement text, or [`None`] for deletion.
	pub replacement: Option<Tendril>,
}

impl Change {
	/// Inserts `text` at `pos` without removing anything.
	pub fn insert(pos: CharIdx, text: impl Into<Tendril>) -> Self {
		Self {
			start: pos,
			end: pos,
			replacement: Some(text.into()),
		}
	}

	/// Deletes `[start, end)`.
	pub fn delete(start: CharIdx, end: CharIdx) -> Self {
		Self {
			start,
			end,
			replacement: None,
		}
	}

	/// Replaces `[start, end)` with `text`.
	pub fn replace(start: CharIdx, end: CharIdx, text: impl Into<Tendril>) -> Self {
		Self {
			start,
			end,
			replacement: Some(text.into()),
		}
	}
}

/// Bias determines how positions at change boundaries are mapped.
///
/// When mapping a position through a change, bias determines whether the position
/// moves with insertions or stays before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
	/// Position stays before insertions at the same location.
	Left,
	/// Position moves after insertions at the same location.
	Right,
}

/// Inserted text together with its length in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Insertion {
	pub(crate) text: Tendril,
	pub(crate) char_len: CharLen,
}

impl Insertion {
	pub(crate) fn new(text: Tendril) -> Self {
		let char_len = text.chars().count();
		Self { text, char_len }
	}
}

/// One step of a [`ChangeSet`](super::ChangeSet) walk over the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Operation {
	/// Keep this many source chars.
	Retain(CharLen),
	/// Drop this many source chars.
	Delete(CharLen),
	/// Emit new text at the cursor.
	Insert(Insertion),
}
