//! Key dispatch.

use cadl_primitives::{Key, KeyCode};

use crate::options::AssistOptions;
use crate::pairs::{closing_pair, wrap_selection};
use crate::state::BufferState;
use crate::types::KeyResult;
use crate::{indent, newline};

/// Stateless keystroke handler for a text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Assistant {
	options: AssistOptions,
}

impl Assistant {
	pub fn new(options: AssistOptions) -> Self {
		Self { options }
	}

	/// Computes how `key` rewrites `state`, without touching it.
	///
	/// The selection is clamped to the text before use, so a stale selection
	/// from the host can never index past the buffer.
	pub fn handle_key(&self, state: &BufferState, key: Key) -> KeyResult {
		let selection = state.selection().clamp(state.len_chars());

		let result = match key.code {
			KeyCode::Tab => indent::handle_tab(state, selection, key.modifiers.shift),
			KeyCode::Enter if self.options.smart_newline && !key.modifiers.has_command() => {
				newline::handle_enter(state, selection)
			}
			KeyCode::Char(c) if self.options.auto_pair && !key.modifiers.has_command() => {
				match closing_pair(c) {
					Some(close) => KeyResult::Edit(wrap_selection(state, selection, c, close)),
					None => KeyResult::Unhandled,
				}
			}
			_ => KeyResult::Unhandled,
		};

		if result.prevents_default() {
			tracing::trace!(
				?key,
				start = selection.start(),
				end = selection.end(),
				edited = result.edit().is_some(),
				"key intercepted"
			);
		}
		result
	}

	/// Handles `key` and applies the resulting edit to `state`.
	///
	/// Returns true if the host must suppress its default action for the key.
	pub fn apply_key(&self, state: &mut BufferState, key: Key) -> bool {
		match self.handle_key(state, key) {
			KeyResult::Edit(edit) => {
				state.apply(&edit);
				true
			}
			KeyResult::Consumed => true,
			KeyResult::Unhandled => false,
		}
	}
}
