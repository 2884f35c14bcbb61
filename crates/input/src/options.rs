//! Assistant options.

use serde::{Deserialize, Serialize};

/// Toggles for the assistant's behaviors.
///
/// Tab handling is always on: a plain text field would otherwise move focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistOptions {
	/// Insert the matching closer when an opening bracket or quote is typed.
	pub auto_pair: bool,
	/// Carry indentation over on Enter and adjust it around braces.
	pub smart_newline: bool,
}

impl Default for AssistOptions {
	fn default() -> Self {
		Self {
			auto_pair: true,
			smart_newline: true,
		}
	}
}
