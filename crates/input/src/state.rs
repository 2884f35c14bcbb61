//! The editable buffer and its selection.

use std::fmt;

use cadl_primitives::{CharLen, Rope, RopeSlice, Selection};

use crate::types::Edit;

/// Text content of the field plus its active selection.
///
/// The selection is clamped to the text on every write, so its bounds always
/// lie within `[0, len_chars]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferState {
	text: Rope,
	selection: Selection,
}

impl BufferState {
	/// Creates a buffer with the given selection, clamped to the text.
	pub fn new(text: &str, selection: Selection) -> Self {
		let text = Rope::from(text);
		let selection = selection.clamp(text.len_chars());
		Self { text, selection }
	}

	/// Creates a buffer with the caret at the end of the text.
	pub fn with_caret_at_end(text: &str) -> Self {
		let len = text.chars().count();
		Self::new(text, Selection::point(len))
	}

	/// Returns a slice over the whole text.
	pub fn slice(&self) -> RopeSlice<'_> {
		self.text.slice(..)
	}

	/// Returns the active selection.
	pub fn selection(&self) -> Selection {
		self.selection
	}

	/// Returns the text length in characters.
	pub fn len_chars(&self) -> CharLen {
		self.text.len_chars()
	}

	/// Replaces the selection, clamping it to the text.
	pub fn set_selection(&mut self, selection: Selection) {
		self.selection = selection.clamp(self.text.len_chars());
	}

	/// Replaces the whole text, keeping the selection clamped.
	pub fn set_text(&mut self, text: &str) {
		self.text = Rope::from(text);
		self.selection = self.selection.clamp(self.text.len_chars());
	}

	/// Applies an edit produced for this buffer.
	///
	/// An edit computed against text of a different length is ignored and
	/// false is returned.
	pub fn apply(&mut self, edit: &Edit) -> bool {
		let expected = edit.transaction.changes().len();
		if expected != self.text.len_chars() {
			tracing::debug!(expected, actual = self.text.len_chars(), "stale edit dropped");
			return false;
		}
		edit.transaction.apply(&mut self.text);
		self.set_selection(edit.selection);
		true
	}
}

impl fmt::Display for BufferState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.text)
	}
}

#[cfg(test)]
mod tests {
	use cadl_primitives::Transaction;

	use super::*;

	#[test]
	fn test_new_clamps_selection() {
		let state = BufferState::new("abc", Selection::new(2, 99));
		assert_eq!(state.selection(), Selection::new(2, 3));
	}

	#[test]
	fn test_set_text_reclamps_selection() {
		let mut state = BufferState::with_caret_at_end("hello world");
		assert_eq!(state.selection(), Selection::point(11));
		state.set_text("hi");
		assert_eq!(state.selection(), Selection::point(2));
		assert_eq!(state.to_string(), "hi");
	}

	#[test]
	fn test_apply_ignores_edit_for_other_text() {
		let source = BufferState::with_caret_at_end("hello");
		let edit = Edit::new(
			Transaction::insert(source.slice(), 5, "!"),
			Selection::point(6),
		);

		let mut other = BufferState::new("hi", Selection::point(1));
		assert!(!other.apply(&edit));
		assert_eq!(other.to_string(), "hi");
		assert_eq!(other.selection(), Selection::point(1));

		let mut same = source.clone();
		assert!(same.apply(&edit));
		assert_eq!(same.to_string(), "hello!");
		assert_eq!(same.selection(), Selection::point(6));
	}

	#[test]
	fn test_counts_characters_not_bytes() {
		let state = BufferState::with_caret_at_end("héllo");
		assert_eq!(state.len_chars(), 5);
		assert_eq!(state.selection(), Selection::point(5));
	}
}
