use super::types::{Bias, Insertion, Operation, Tendril};
use crate::Rope;
use crate::selection::{CharIdx, CharLen};

/// Retain/delete/insert operations describing one edit of a document.
///
/// Operations are read left to right against the source text. `len` counts
/// the source chars they consume and `len_after` the chars they produce.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeSet {
	ops: Vec<Operation>,
	len: CharLen,
	len_after: CharLen,
}

impl ChangeSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Chars of source text this changeset expects.
	pub fn len(&self) -> CharLen {
		self.len
	}

	/// Chars of text left once the changeset is applied.
	pub fn len_after(&self) -> CharLen {
		self.len_after
	}

	/// Keeps `n` source chars. Runs of retains collapse into one.
	pub(crate) fn retain(&mut self, n: CharLen) {
		if n == 0 {
			return;
		}
		self.len += n;
		self.len_after += n;
		match self.ops.last_mut() {
			Some(Operation::Retain(run)) => *run += n,
			_ => self.ops.push(Operation::Retain(n)),
		}
	}

	/// Drops `n` source chars. Runs of deletes collapse into one.
	pub(crate) fn delete(&mut self, n: CharLen) {
		if n == 0 {
			return;
		}
		self.len += n;
		match self.ops.last_mut() {
			Some(Operation::Delete(run)) => *run += n,
			_ => self.ops.push(Operation::Delete(n)),
		}
	}

	/// Emits `text` at the cursor.
	///
	/// Inserts are kept ahead of a trailing delete, so "delete then insert"
	/// and "insert then delete" produce the same operation list.
	pub(crate) fn insert(&mut self, text: Tendril) {
		if text.is_empty() {
			return;
		}
		let ins = Insertion::new(text);
		self.len_after += ins.char_len;

		match self.ops.as_mut_slice() {
			[.., Operation::Insert(prev)] | [.., Operation::Insert(prev), Operation::Delete(_)] => {
				prev.text.push_str(&ins.text);
				prev.char_len += ins.char_len;
			}
			[.., last @ Operation::Delete(_)] => {
				let deleted = std::mem::replace(last, Operation::Insert(ins));
				self.ops.push(deleted);
			}
			_ => self.ops.push(Operation::Insert(ins)),
		}
	}

	/// Rewrites `doc` in place. `doc` must hold [`len`](Self::len) chars.
	pub fn apply(&self, doc: &mut Rope) {
		let mut cursor = 0;
		for op in &self.ops {
			match op {
				Operation::Retain(n) => cursor += n,
				Operation::Delete(n) => doc.remove(cursor..cursor + n),
				Operation::Insert(ins) => {
					doc.insert(cursor, &ins.text);
					cursor += ins.char_len;
				}
			}
		}
	}

	/// Carries a source position into the edited text.
	///
	/// A position inside a deleted run lands where the run was. At an insert
	/// point, `Bias::Left` stays in front of the new text and `Bias::Right`
	/// moves past it.
	pub fn map_pos(&self, pos: CharIdx, bias: Bias) -> CharIdx {
		let mut old = 0;
		let mut new = 0;

		for op in &self.ops {
			if old > pos {
				break;
			}
			match op {
				Operation::Retain(n) if old + n > pos => return new + (pos - old),
				Operation::Retain(n) => {
					old += n;
					new += n;
				}
				Operation::Delete(n) if old + n > pos => return new,
				Operation::Delete(n) => old += n,
				Operation::Insert(ins) => {
					if old != pos || bias == Bias::Right {
						new += ins.char_len;
					}
				}
			}
		}

		new + (pos - old)
	}
}
