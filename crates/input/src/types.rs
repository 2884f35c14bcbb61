use cadl_primitives::{Selection, Transaction};

/// A rewrite of the buffer produced by a handled key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
	/// Changes against the buffer the key was handled on.
	pub transaction: Transaction,
	/// Selection to install once the transaction is applied.
	pub selection: Selection,
}

impl Edit {
	pub fn new(transaction: Transaction, selection: Selection) -> Self {
		Self {
			transaction,
			selection,
		}
	}
}

/// Result of processing a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResult {
	/// The key rewrites the buffer. The host must suppress its default action.
	Edit(Edit),
	/// Key was consumed but the buffer stays as it is.
	Consumed,
	/// Key was not handled; the host's default behavior applies.
	Unhandled,
}

impl KeyResult {
	/// Returns true if the host must suppress its default handling of the key.
	pub fn prevents_default(&self) -> bool {
		!matches!(self, KeyResult::Unhandled)
	}

	/// Returns the edit, if any.
	pub fn edit(&self) -> Option<&Edit> {
		match self {
			KeyResult::Edit(edit) => Some(edit),
			_ => None,
		}
	}
}
