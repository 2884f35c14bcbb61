//! Error types for loading and running the interpreter.

use thiserror::Error;

/// Failure reported by a host collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
	pub fn new(message: impl Into<String>) -> Self {
		Self(message.into())
	}
}

/// Errors raised while preparing the runtime or running a program.
#[derive(Debug, Error)]
pub enum PlaygroundError {
	/// The runtime itself failed to start.
	#[error("runtime failed to boot: {0}")]
	Boot(#[source] HostError),

	/// An interpreter source file answered with a non-success status.
	#[error("fetch failed for {name}: {status}")]
	Fetch {
		/// File name from the configuration.
		name: String,
		/// HTTP status code.
		status: u16,
	},

	/// An interpreter source file could not be requested at all.
	#[error("could not fetch {name}: {source}")]
	Transport {
		/// File name from the configuration.
		name: String,
		/// The underlying host error.
		source: HostError,
	},

	/// A fetched file could not be written into the runtime.
	#[error("could not install {name}: {source}")]
	Install {
		/// File name from the configuration.
		name: String,
		/// The underlying host error.
		source: HostError,
	},

	/// The entry module failed to import.
	#[error("could not import {module}: {source}")]
	Import {
		/// Module name from the configuration.
		module: String,
		/// The underlying host error.
		source: HostError,
	},

	/// The program raised an error while running.
	#[error("{0}")]
	Execution(#[source] HostError),

	/// `run` was called before the runtime finished loading.
	#[error("runtime is not loaded")]
	NotLoaded,

	/// The configuration could not be parsed.
	#[error("invalid playground config: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type for playground operations.
pub type Result<T> = std::result::Result<T, PlaygroundError>;
