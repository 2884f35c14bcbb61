//! The playground session: one buffer, one assistant, one runtime.

use cadl_input::{Assistant, BufferState};
use cadl_primitives::Key;

use crate::config::PlaygroundConfig;
use crate::error::PlaygroundError;
use crate::host::{Fetcher, RuntimeHost};
use crate::loader::RuntimeLoader;
use crate::source::ProgramSource;
use crate::status::Status;

/// Output shown when a program printed nothing.
pub const NO_OUTPUT: &str = "Ran program (no output).";

/// Everything the playground page needs, owned in one place.
///
/// The session is passed to whichever UI callback needs it; there is no
/// process-wide runtime handle.
pub struct Session<H, F> {
	config: PlaygroundConfig,
	assistant: Assistant,
	buffer: BufferState,
	loader: RuntimeLoader<H, F>,
	status: Status,
	output: String,
}

impl<H: RuntimeHost, F: Fetcher> Session<H, F> {
	/// Creates a session whose buffer starts out holding the sample program.
	pub fn new(config: PlaygroundConfig, host: H, fetcher: F) -> Self {
		let loader = RuntimeLoader::new(host, fetcher, &config);
		let buffer = BufferState::new(config.sample.trim(), Default::default());
		Self {
			assistant: Assistant::new(config.assist),
			buffer,
			loader,
			status: Status::Idle,
			output: String::new(),
			config,
		}
	}

	pub fn buffer(&self) -> &BufferState {
		&self.buffer
	}

	pub fn buffer_mut(&mut self) -> &mut BufferState {
		&mut self.buffer
	}

	pub fn loader(&self) -> &RuntimeLoader<H, F> {
		&self.loader
	}

	pub fn status(&self) -> &Status {
		&self.status
	}

	pub fn output(&self) -> &str {
		&self.output
	}

	pub fn is_ready(&self) -> bool {
		self.loader.is_ready()
	}

	/// Feeds a keystroke to the assistant.
	///
	/// Returns true if the host must suppress the key's default action.
	pub fn handle_key(&mut self, key: Key) -> bool {
		self.assistant.apply_key(&mut self.buffer, key)
	}

	/// The program `run` would execute right now.
	pub fn program(&self) -> ProgramSource {
		ProgramSource::resolve(Some(&self.buffer.to_string()), &self.config.sample)
	}

	/// Loads the runtime, reporting each stage through [`Session::status`].
	///
	/// Returns true once the runtime is ready. Failures end up in the status
	/// line and are not retried.
	pub async fn load(&mut self) -> bool {
		let status = &mut self.status;
		let result = self
			.loader
			.prepare(|stage| {
				tracing::debug!(%stage, "load progress");
				*status = stage;
			})
			.await;

		match result {
			Ok(()) => {
				self.status = Status::Ready;
				true
			}
			Err(err) => {
				self.fail(&err);
				false
			}
		}
	}

	/// Runs the current program and returns the text to display.
	///
	/// Does nothing until the runtime is loaded. Execution errors end up in
	/// the status line and leave the previous output in place.
	pub async fn run(&mut self) -> Option<&str> {
		if !self.loader.is_ready() {
			tracing::debug!("run ignored: runtime not loaded");
			return None;
		}

		self.status = Status::Running;
		let program = self.program();
		tracing::debug!(fallback = program.is_fallback(), "running program");

		match self.loader.run(program.text()).await {
			Ok(output) => {
				self.output = if output.trim().is_empty() {
					NO_OUTPUT.to_string()
				} else {
					output
				};
				self.status = Status::Finished;
				Some(self.output.as_str())
			}
			Err(err) => {
				self.fail(&err);
				None
			}
		}
	}

	fn fail(&mut self, err: &PlaygroundError) {
		tracing::warn!(error = %err, "playground action failed");
		self.status = Status::Error(err.to_string());
	}
}
