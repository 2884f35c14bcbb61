//! Tab and Shift+Tab: indenting and dedenting line ranges.

use cadl_primitives::{Bias, CharIdx, CharLen, Change, RopeSlice, Selection, Transaction, line_starts};

use crate::state::BufferState;
use crate::types::{Edit, KeyResult};

/// One indentation step.
pub const INDENT_UNIT: &str = "  ";

/// Character length of [`INDENT_UNIT`].
pub const INDENT_UNIT_LEN: CharLen = INDENT_UNIT.len();

/// Handles Tab (`reverse == false`) or Shift+Tab (`reverse == true`).
///
/// Tab is always consumed so focus never leaves the field.
pub(crate) fn handle_tab(state: &BufferState, selection: Selection, reverse: bool) -> KeyResult {
	let text = state.slice();

	if reverse {
		return dedent_lines(text, selection);
	}

	if selection.is_empty() {
		let pos = selection.start();
		let transaction = Transaction::insert(text, pos, INDENT_UNIT);
		return KeyResult::Edit(Edit::new(transaction, Selection::point(pos + INDENT_UNIT_LEN)));
	}

	indent_lines(text, selection)
}

/// Prepends one indent unit to every line touched by the selection.
fn indent_lines(text: RopeSlice, selection: Selection) -> KeyResult {
	let starts = line_starts(text, selection.start(), selection.end());
	let transaction = Transaction::change(text, starts.iter().map(|&start| Change::insert(start, INDENT_UNIT)));

	let selection = Selection::new(
		selection.start() + INDENT_UNIT_LEN,
		selection.end() + INDENT_UNIT_LEN * starts.len(),
	);
	KeyResult::Edit(Edit::new(transaction, selection))
}

/// Removes one indent unit (or one leading tab) from every touched line.
///
/// The selection is carried through the deletions, so bounds inside a
/// removed run land on the start of that line.
fn dedent_lines(text: RopeSlice, selection: Selection) -> KeyResult {
	let changes: Vec<Change> = line_starts(text, selection.start(), selection.end())
		.into_iter()
		.filter_map(|start| {
			let width = dedent_width(text, start);
			(width > 0).then(|| Change::delete(start, start + width))
		})
		.collect();

	if changes.is_empty() {
		return KeyResult::Consumed;
	}

	let transaction = Transaction::change(text, changes);
	let selection = transaction.map_selection(selection, Bias::Right);
	KeyResult::Edit(Edit::new(transaction, selection))
}

/// Number of characters a dedent removes from the line starting at `start`.
fn dedent_width(text: RopeSlice, start: CharIdx) -> CharLen {
	let mut chars = text.chars_at(start);
	match (chars.next(), chars.next()) {
		(Some(' '), Some(' ')) => INDENT_UNIT_LEN,
		(Some('\t'), _) => 1,
		_ => 0,
	}
}
