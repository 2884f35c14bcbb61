//! Smart newline: carry indentation onto the new line.

use cadl_primitives::{Change, Selection, Transaction, leading_whitespace, line_start};

use crate::indent::INDENT_UNIT;
use crate::state::BufferState;
use crate::types::{Edit, KeyResult};

/// Handles Enter.
///
/// Only intercepts when the new line gets indentation; a bare newline is
/// left to the host so its native behavior applies unchanged.
pub(crate) fn handle_enter(state: &BufferState, selection: Selection) -> KeyResult {
	let text = state.slice();
	let caret = selection.start();
	let line: String = text.slice(line_start(text, caret)..caret).into();

	let indent = newline_indent(&line);
	if indent.is_empty() {
		return KeyResult::Unhandled;
	}

	let insert = format!("\n{indent}");
	let caret = caret + insert.chars().count();
	let transaction = Transaction::change(text, [Change::replace(selection.start(), selection.end(), insert)]);
	KeyResult::Edit(Edit::new(transaction, Selection::point(caret)))
}

/// Computes the indentation for a line following `line`.
///
/// `line` is the text from the start of the current line up to the caret.
/// A line opening with `}` gives up one indent step, and a line ending with
/// `{` adds one.
pub fn newline_indent(line: &str) -> String {
	let base = leading_whitespace(line);
	let trimmed = line.trim_end();

	let mut indent = if trimmed.trim_start().starts_with('}') {
		outdent(base).to_string()
	} else {
		base.to_string()
	};

	if trimmed.ends_with('{') {
		indent.push_str(INDENT_UNIT);
	}
	indent
}

/// Drops one indent step from `indent`, never going below nothing.
fn outdent(indent: &str) -> &str {
	if let Some(rest) = indent.strip_suffix(INDENT_UNIT) {
		rest
	} else if let Some(rest) = indent.strip_prefix('\t') {
		rest
	} else {
		indent.strip_suffix(' ').unwrap_or(indent)
	}
}
