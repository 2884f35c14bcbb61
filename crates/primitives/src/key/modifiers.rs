//! Key modifier types (Ctrl, Alt, Shift, Meta).

/// Key modifiers (Ctrl, Alt, Shift, Meta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt (Option) is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
	/// Whether Meta (Command) is held.
	pub meta: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
		meta: false,
	};

	/// Only Ctrl pressed.
	pub const CTRL: Self = Self {
		ctrl: true,
		..Self::NONE
	};

	/// Only Alt pressed.
	pub const ALT: Self = Self {
		alt: true,
		..Self::NONE
	};

	/// Only Shift pressed.
	pub const SHIFT: Self = Self {
		shift: true,
		..Self::NONE
	};

	/// Only Meta pressed.
	pub const META: Self = Self {
		meta: true,
		..Self::NONE
	};

	/// Returns a copy with Ctrl added.
	pub fn ctrl(self) -> Self {
		Self { ctrl: true, ..self }
	}

	/// Returns a copy with Alt added.
	pub fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	/// Returns a copy with Shift added.
	pub fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	/// Returns a copy with Meta added.
	pub fn meta(self) -> Self {
		Self { meta: true, ..self }
	}

	/// Returns true if a command-style modifier (Ctrl, Alt or Meta) is held.
	///
	/// Shift is excluded: it is part of typing characters such as `(` or `"`.
	pub fn has_command(self) -> bool {
		self.ctrl || self.alt || self.meta
	}
}
