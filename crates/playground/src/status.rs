//! Status line shown next to the playground controls.

use std::fmt;

/// Progress of the current load or run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
	/// Nothing has happened yet.
	#[default]
	Idle,
	/// The runtime is booting.
	LoadingRuntime,
	/// Interpreter files are being fetched and installed.
	FetchingSources,
	/// The entry module is being imported.
	Importing,
	/// The runtime accepts programs.
	Ready,
	/// A program is executing.
	Running,
	/// The last program completed.
	Finished,
	/// The last action failed.
	Error(String),
}

impl Status {
	/// Returns true for [`Status::Error`].
	pub fn is_error(&self) -> bool {
		matches!(self, Status::Error(_))
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Status::Idle => f.write_str("Idle."),
			Status::LoadingRuntime => f.write_str("Loading runtime…"),
			Status::FetchingSources => f.write_str("Fetching CADL files…"),
			Status::Importing => f.write_str("Importing CADL…"),
			Status::Ready => f.write_str("Loaded. Ready."),
			Status::Running => f.write_str("Running program…"),
			Status::Finished => f.write_str("Program finished."),
			Status::Error(message) => write!(f, "Error: {message}"),
		}
	}
}
