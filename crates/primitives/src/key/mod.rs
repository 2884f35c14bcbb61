//! Platform-independent key events.

mod modifiers;

pub use modifiers::Modifiers;

/// The physical or logical key that was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	/// A printable character, already shifted (`(` rather than `9`).
	Char(char),
	/// Tab.
	Tab,
	/// Enter / Return.
	Enter,
	/// Backspace.
	Backspace,
	/// Any key without a dedicated variant (arrows, function keys, ...).
	Other,
}

/// A key press together with the modifiers held at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	/// The key that was pressed.
	pub code: KeyCode,
	/// Modifiers held during the press.
	pub modifiers: Modifiers,
}

impl Key {
	/// Creates an unmodified key.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Creates an unmodified character key.
	pub const fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c))
	}

	/// Creates an unmodified Tab key.
	pub const fn tab() -> Self {
		Self::new(KeyCode::Tab)
	}

	/// Creates an unmodified Enter key.
	pub const fn enter() -> Self {
		Self::new(KeyCode::Enter)
	}

	/// Returns a copy with the given modifiers.
	pub const fn with_modifiers(self, modifiers: Modifiers) -> Self {
		Self {
			code: self.code,
			modifiers,
		}
	}

	/// Translates a browser `KeyboardEvent.key` value.
	///
	/// Named keys map to their dedicated variants, a single-character value
	/// maps to [`KeyCode::Char`], and anything else becomes [`KeyCode::Other`].
	pub fn from_dom(name: &str, modifiers: Modifiers) -> Self {
		let code = match name {
			"Tab" => KeyCode::Tab,
			"Enter" => KeyCode::Enter,
			"Backspace" => KeyCode::Backspace,
			_ => {
				let mut chars = name.chars();
				match (chars.next(), chars.next()) {
					(Some(c), None) => KeyCode::Char(c),
					_ => KeyCode::Other,
				}
			}
		};
		Self { code, modifiers }
	}
}
