//! Text changes expressed as retain/delete/insert operations.
//!
//! A [`Transaction`] is built against a document snapshot, applied to a
//! [`Rope`], and used to carry positions from the old text to the new one.

mod changeset;
mod types;


pub use changeset::ChangeSet;
pub use types::{Bias, Change, Tendril};

use crate::selection::{CharIdx, Selection};
use crate::{Rope, RopeSlice};

/// A set of changes against one document snapshot.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transaction {
	changes: ChangeSet,
}

impl Transaction {
	/// Builds a transaction from changes sorted by position.
	///
	/// Bounds are clamped to the document, and a change starting before the
	/// end of the previous one is moved up to that end, so overlapping input
	/// degrades to adjacent edits instead of corrupting the changeset.
	pub fn change(doc: RopeSlice, changes: impl IntoIterator<Item = Change>) -> Self {
		let len = doc.len_chars();
		let mut cs = ChangeSet::new();
		let mut last = 0;

		for Change {
			start,
			end,
			replacement,
		} in changes
		{
			let start = start.clamp(last, len);
			let end = end.clamp(start, len);

			cs.retain(start - last);
			cs.delete(end - start);
			if let Some(text) = replacement {
				cs.insert(text);
			}
			last = end;
		}

		cs.retain(len - last);
		Self { changes: cs }
	}

	/// Inserts `text` at a single position.
	pub fn insert(doc: RopeSlice, pos: CharIdx, text: impl Into<String>) -> Self {
		Self::change(doc, [Change::insert(pos, text)])
	}

	/// Returns the underlying changeset.
	pub fn changes(&self) -> &ChangeSet {
		&self.changes
	}

	/// Applies the transaction to a document in place.
	pub fn apply(&self, doc: &mut Rope) {
		self.changes.apply(doc);
	}

	/// Maps a position from the old document into the new one.
	pub fn map_pos(&self, pos: CharIdx, bias: Bias) -> CharIdx {
		self.changes.map_pos(pos, bias)
	}

	/// Maps both bounds of a selection with the same bias.
	pub fn map_selection(&self, selection: Selection, bias: Bias) -> Selection {
		selection.map(|pos| self.map_pos(pos, bias))
	}
}
