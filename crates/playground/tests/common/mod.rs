//! In-memory collaborators for playground tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use cadl_playground::{FetchResponse, Fetcher, HostError, PlaygroundConfig, RuntimeHost, Session};

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

/// Records every call. `execute` pops `script` and falls back to `output`.
#[derive(Debug, Default)]
pub struct FakeHost {
	pub boots: usize,
	pub files: Vec<(String, String)>,
	pub imported: Vec<String>,
	pub executed: Vec<String>,
	pub fail_boot: bool,
	pub fail_write: bool,
	pub fail_import: bool,
	pub output: String,
	pub script: VecDeque<Result<String, HostError>>,
}

#[async_trait(?Send)]
impl RuntimeHost for FakeHost {
	async fn boot(&mut self) -> Result<(), HostError> {
		self.boots += 1;
		if self.fail_boot {
			return Err(HostError::new("wasm instantiation failed"));
		}
		Ok(())
	}

	async fn write_file(&mut self, name: &str, contents: &str) -> Result<(), HostError> {
		if self.fail_write {
			return Err(HostError::new("read-only file system"));
		}
		self.files.push((name.to_string(), contents.to_string()));
		Ok(())
	}

	async fn import_module(&mut self, module: &str) -> Result<(), HostError> {
		if self.fail_import {
			return Err(HostError::new("ModuleNotFoundError"));
		}
		self.imported.push(module.to_string());
		Ok(())
	}

	async fn execute(&mut self, source: &str) -> Result<String, HostError> {
		self.executed.push(source.to_string());
		self.script.pop_front().unwrap_or_else(|| Ok(self.output.clone()))
	}
}

/// Serves `# <url>` for every URL unless overridden.
#[derive(Debug, Default)]
pub struct FakeFetcher {
	pub overrides: HashMap<String, Result<FetchResponse, HostError>>,
}

impl FakeFetcher {
	pub fn with(mut self, url: &str, response: Result<FetchResponse, HostError>) -> Self {
		self.overrides.insert(url.to_string(), response);
		self
	}
}

#[async_trait(?Send)]
impl Fetcher for FakeFetcher {
	async fn get(&self, url: &str) -> Result<FetchResponse, HostError> {
		match self.overrides.get(url) {
			Some(response) => response.clone(),
			None => Ok(FetchResponse::ok(format!("# {url}"))),
		}
	}
}

pub fn two_file_config() -> PlaygroundConfig {
	PlaygroundConfig::from_toml_str(
		r#"
		entry_module = "cadl_interp"

		[[sources]]
		name = "cadl_interp.py"
		url = "https://example.invalid/cadl_interp.py"

		[[sources]]
		name = "cadl_fe.py"
		url = "https://example.invalid/cadl_fe.py"
		"#,
	)
	.expect("config parses")
}

pub fn session(host: FakeHost, fetcher: FakeFetcher) -> Session<FakeHost, FakeFetcher> {
	init_tracing();
	Session::new(two_file_config(), host, fetcher)
}
