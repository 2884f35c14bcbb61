//! Editing assistant for a plain multi-line text field.
//!
//! The assistant intercepts Tab, Enter, and opening brackets/quotes and turns
//! them into indentation- and pairing-aware edits. Every key is handled as a
//! pure transformation of `(buffer, selection)`; the host decides how to
//! apply the resulting [`Edit`] and whether to suppress its default action.

pub mod handler;
pub mod indent;
pub mod newline;
pub mod options;
pub mod pairs;
pub mod state;
pub mod types;

pub use handler::Assistant;
pub use indent::INDENT_UNIT;
pub use options::AssistOptions;
pub use pairs::{PAIRS, closing_pair};
pub use state::BufferState;
pub use types::{Edit, KeyResult};
