//! Rope utilities and line helpers.
//!
//! Lines are delimited by `'\n'` only. They are derived on demand from a
//! position and never stored.

use ropey::RopeSlice;

use crate::selection::CharIdx;

/// Returns the offset of the first character of the line containing `pos`.
///
/// `pos` is clamped to the text length.
pub fn line_start(text: RopeSlice, pos: CharIdx) -> CharIdx {
	let pos = pos.min(text.len_chars());
	let mut chars = text.chars_at(pos);
	let mut idx = pos;
	while let Some(c) = chars.prev() {
		if c == '\n' {
			break;
		}
		idx -= 1;
	}
	idx
}

/// Returns the start offsets of every line touched by `from..=to`.
///
/// The line containing `to` is always included, even when `to` sits at its
/// first column, so the result is never empty.
pub fn line_starts(text: RopeSlice, from: CharIdx, to: CharIdx) -> Vec<CharIdx> {
	let len = text.len_chars();
	let to = to.min(len);
	let first = line_start(text, from.min(to));

	let mut starts = vec![first];
	starts.extend(
		text.slice(first..to)
			.chars()
			.enumerate()
			.filter(|(_, c)| *c == '\n')
			.map(|(offset, _)| first + offset + 1),
	);
	starts
}

/// Returns the leading run of spaces and tabs of `line`.
pub fn leading_whitespace(line: &str) -> &str {
	let end = line
		.find(|c: char| c != ' ' && c != '\t')
		.unwrap_or(line.len());
	&line[..end]
}

#[cfg(test)]
mod tests {
	use ropey::Rope;

	use super::*;

	#[test]
	fn test_line_start() {
		let text = Rope::from("ab\ncd\n\nef");
		let slice = text.slice(..);
		assert_eq!(line_start(slice, 0), 0);
		assert_eq!(line_start(slice, 2), 0);
		assert_eq!(line_start(slice, 3), 3);
		assert_eq!(line_start(slice, 5), 3);
		assert_eq!(line_start(slice, 6), 6);
		assert_eq!(line_start(slice, 8), 7);
		assert_eq!(line_start(slice, 99), 7);
	}

	#[test]
	fn test_line_starts_single_line() {
		let text = Rope::from("hello\nworld");
		assert_eq!(line_starts(text.slice(..), 2, 4), vec![0]);
		assert_eq!(line_starts(text.slice(..), 8, 8), vec![6]);
	}

	#[test]
	fn test_line_starts_spanning_lines() {
		let text = Rope::from("a\nbb\nccc\nd");
		assert_eq!(line_starts(text.slice(..), 1, 7), vec![0, 2, 5]);
	}

	#[test]
	fn test_line_starts_includes_line_at_first_column() {
		let text = Rope::from("a\nb\nc");
		assert_eq!(line_starts(text.slice(..), 0, 2), vec![0, 2]);
	}

	#[test]
	fn test_line_starts_clamps_out_of_range() {
		let text = Rope::from("a\nb");
		assert_eq!(line_starts(text.slice(..), 50, 80), vec![2]);
	}

	#[test]
	fn test_leading_whitespace() {
		assert_eq!(leading_whitespace("  foo"), "  ");
		assert_eq!(leading_whitespace("\t  x "), "\t  ");
		assert_eq!(leading_whitespace("foo"), "");
		assert_eq!(leading_whitespace("    "), "    ");
		assert_eq!(leading_whitespace(""), "");
	}
}
