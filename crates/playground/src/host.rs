//! Collaborators supplied by the embedding host.
//!
//! In a browser these wrap the WASM interpreter and `fetch`; tests provide
//! in-memory fakes. Futures are not required to be `Send` since the browser
//! drives everything from a single thread.

use async_trait::async_trait;

use crate::error::HostError;

/// An interpreter runtime with a writable file system.
#[async_trait(?Send)]
pub trait RuntimeHost {
	/// Starts the runtime.
	async fn boot(&mut self) -> Result<(), HostError>;

	/// Writes a file into the runtime's file system.
	async fn write_file(&mut self, name: &str, contents: &str) -> Result<(), HostError>;

	/// Imports a module from previously written files.
	async fn import_module(&mut self, module: &str) -> Result<(), HostError>;

	/// Runs a program and returns everything it printed.
	async fn execute(&mut self, source: &str) -> Result<String, HostError>;
}

/// Retrieves remote text files.
#[async_trait(?Send)]
pub trait Fetcher {
	/// Requests `url`. Transport failures are errors; HTTP failures are
	/// responses with a non-success status.
	async fn get(&self, url: &str) -> Result<FetchResponse, HostError>;
}

/// Response to a [`Fetcher::get`] request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body.
	pub body: String,
}

impl FetchResponse {
	/// A `200 OK` response carrying `body`.
	pub fn ok(body: impl Into<String>) -> Self {
		Self {
			status: 200,
			body: body.into(),
		}
	}

	/// A bodiless response with the given status.
	pub fn status(status: u16) -> Self {
		Self {
			status,
			body: String::new(),
		}
	}

	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}
