//! Boots the interpreter: fetch sources, install them, import the entry module.

use crate::config::{InterpreterSource, PlaygroundConfig};
use crate::error::{PlaygroundError, Result};
use crate::host::{Fetcher, RuntimeHost};
use crate::status::Status;

/// Where the loader is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoaderState {
	/// `prepare` has not completed.
	#[default]
	Unloaded,
	/// Programs can run.
	Ready,
	/// The last `prepare` failed with this message.
	Failed(String),
}

/// Prepares a [`RuntimeHost`] and runs programs on it once ready.
pub struct RuntimeLoader<H, F> {
	host: H,
	fetcher: F,
	sources: Vec<InterpreterSource>,
	entry_module: String,
	state: LoaderState,
}

impl<H: RuntimeHost, F: Fetcher> RuntimeLoader<H, F> {
	pub fn new(host: H, fetcher: F, config: &PlaygroundConfig) -> Self {
		Self {
			host,
			fetcher,
			sources: config.sources.clone(),
			entry_module: config.entry_module.clone(),
			state: LoaderState::Unloaded,
		}
	}

	pub fn state(&self) -> &LoaderState {
		&self.state
	}

	pub fn is_ready(&self) -> bool {
		self.state == LoaderState::Ready
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	/// Boots the runtime and installs the interpreter.
	///
	/// `progress` receives each stage as it starts. Sources are fetched in
	/// configuration order and the first failure aborts the sequence; nothing
	/// is retried. Calling this again starts over from booting.
	pub async fn prepare(&mut self, mut progress: impl FnMut(Status)) -> Result<()> {
		self.state = LoaderState::Unloaded;
		match self.boot_and_install(&mut progress).await {
			Ok(()) => {
				tracing::debug!(module = %self.entry_module, "runtime ready");
				self.state = LoaderState::Ready;
				Ok(())
			}
			Err(err) => {
				self.state = LoaderState::Failed(err.to_string());
				Err(err)
			}
		}
	}

	async fn boot_and_install(&mut self, progress: &mut impl FnMut(Status)) -> Result<()> {
		progress(Status::LoadingRuntime);
		self.host.boot().await.map_err(PlaygroundError::Boot)?;

		progress(Status::FetchingSources);
		for InterpreterSource { name, url } in &self.sources {
			tracing::debug!(%name, %url, "fetching interpreter source");
			let response = self
				.fetcher
				.get(url)
				.await
				.map_err(|source| PlaygroundError::Transport {
					name: name.clone(),
					source,
				})?;
			if !response.is_success() {
				return Err(PlaygroundError::Fetch {
					name: name.clone(),
					status: response.status,
				});
			}
			self.host
				.write_file(name, &response.body)
				.await
				.map_err(|source| PlaygroundError::Install {
					name: name.clone(),
					source,
				})?;
		}

		progress(Status::Importing);
		self.host
			.import_module(&self.entry_module)
			.await
			.map_err(|source| PlaygroundError::Import {
				module: self.entry_module.clone(),
				source,
			})
	}

	/// Runs `source` and returns its captured output.
	pub async fn run(&mut self, source: &str) -> Result<String> {
		if !self.is_ready() {
			return Err(PlaygroundError::NotLoaded);
		}
		self.host.execute(source).await.map_err(PlaygroundError::Execution)
	}
}
