//! Core types for text editing: selections, keys, transactions, and line helpers.

/// Key and modifier types.
pub mod key;
/// Rope utilities and line helpers.
pub mod rope;
/// Character-offset selection type.
pub mod selection;
/// Change primitives applied to a rope.
pub mod transaction;

pub use key::{Key, KeyCode, Modifiers};
pub use rope::{leading_whitespace, line_start, line_starts};
pub use ropey::{Rope, RopeSlice};
pub use selection::{CharIdx, CharLen, Selection};
pub use transaction::{Bias, Change, ChangeSet, Transaction};
