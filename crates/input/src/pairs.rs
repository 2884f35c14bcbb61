//! Bracket and quote auto-pairing.

use cadl_primitives::{Change, Selection, Transaction};

use crate::state::BufferState;
use crate::types::Edit;

/// Opening characters and the closers inserted with them.
pub const PAIRS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}'), ('"', '"'), ('\'', '\'')];

/// Returns the closer for an opening character.
pub fn closing_pair(open: char) -> Option<char> {
	PAIRS
		.iter()
		.find(|(o, _)| *o == open)
		.map(|(_, close)| *close)
}

/// Inserts `open` and `close` around the selection.
///
/// A caret ends up between the two characters. A highlighted range is
/// wrapped and stays selected, shifted past the opener.
pub(crate) fn wrap_selection(state: &BufferState, selection: Selection, open: char, close: char) -> Edit {
	let text = state.slice();
	let (start, end) = (selection.start(), selection.end());

	let transaction = if selection.is_empty() {
		Transaction::insert(text, start, format!("{open}{close}"))
	} else {
		Transaction::change(
			text,
			[Change::insert(start, open.to_string()), Change::insert(end, close.to_string())],
		)
	};

	Edit::new(transaction, Selection::new(start + 1, end + 1))
}
