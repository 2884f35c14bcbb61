//! Program text handed to the runtime.

/// The program to execute, taken from the buffer or the fallback sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramSource {
	/// Trimmed contents of the editing buffer.
	Buffer(String),
	/// The sample used when the buffer is absent or blank.
	Fallback(String),
}

impl ProgramSource {
	/// Picks the trimmed buffer text, or `fallback` when there is none.
	pub fn resolve(buffer: Option<&str>, fallback: &str) -> Self {
		match buffer.map(str::trim) {
			Some(text) if !text.is_empty() => ProgramSource::Buffer(text.to_string()),
			_ => ProgramSource::Fallback(fallback.to_string()),
		}
	}

	/// Returns the program text.
	pub fn text(&self) -> &str {
		match self {
			ProgramSource::Buffer(text) | ProgramSource::Fallback(text) => text,
		}
	}

	/// Returns true if the fallback sample was chosen.
	pub fn is_fallback(&self) -> bool {
		matches!(self, ProgramSource::Fallback(_))
	}
}
