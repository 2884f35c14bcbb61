//! Playground configuration.
//!
//! Every field has a default, so a TOML document only needs to name what it
//! overrides:
//!
//! ```toml
//! entry_module = "cadl_interp"
//!
//! [[sources]]
//! name = "cadl_interp.py"
//! url = "https://example.invalid/cadl_interp.py"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

const SOURCE_BASE_URL: &str = "https://raw.githubusercontent.com/twill386/Cat-ASCII-Design-Language/main/src";

const SOURCE_FILES: &[&str] = &[
	"cadl_interp.py",
	"cadl_fe.py",
	"cadl_interp_walk.py",
	"cadl_symtab.py",
	"dumpast.py",
	"cadl_ascii_render.py",
	"cadl_lexer.py",
];

/// Program run when the editing buffer is empty.
pub const SAMPLE_PROGRAM: &str = r#"
cat Miso {
    mood = "sleepy";
    ears = "pointy";
}
draw Miso;
"#;

/// One interpreter file to fetch and install before the runtime is ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterSource {
	/// File name inside the runtime's file system.
	pub name: String,
	/// Where to fetch the file from.
	pub url: String,
}

/// Settings for the playground session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
	/// Module imported once all sources are installed.
	pub entry_module: String,
	/// Interpreter files, fetched in order.
	pub sources: Vec<InterpreterSource>,
	/// Program run when the buffer holds nothing but whitespace.
	pub sample: String,
	/// Editing assistant toggles.
	pub assist: cadl_input::AssistOptions,
}

impl Default for PlaygroundConfig {
	fn default() -> Self {
		Self {
			entry_module: "cadl_interp".into(),
			sources: SOURCE_FILES
				.iter()
				.map(|name| InterpreterSource {
					name: (*name).into(),
					url: format!("{SOURCE_BASE_URL}/{name}"),
				})
				.collect(),
			sample: SAMPLE_PROGRAM.into(),
			assist: cadl_input::AssistOptions::default(),
		}
	}
}

impl PlaygroundConfig {
	/// Parses a TOML document, filling unspecified fields with defaults.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::PlaygroundError;

	#[test]
	fn test_default_lists_interpreter_sources() {
		let config = PlaygroundConfig::default();
		assert_eq!(config.entry_module, "cadl_interp");
		assert_eq!(config.sources.len(), 7);
		assert_eq!(config.sources[0].name, "cadl_interp.py");
		assert!(config.sources[0].url.ends_with("/src/cadl_interp.py"));
		assert!(config.sample.contains("draw Miso;"));
	}

	#[test]
	fn test_empty_document_is_default() {
		assert_eq!(PlaygroundConfig::from_toml_str("").unwrap(), PlaygroundConfig::default());
	}

	#[test]
	fn test_overrides() {
		let config = PlaygroundConfig::from_toml_str(
			r#"
			entry_module = "interp"
			sample = "draw Tom;"

			[assist]
			auto_pair = false

			[[sources]]
			name = "interp.py"
			url = "https://example.invalid/interp.py"
			"#,
		)
		.unwrap();
		assert_eq!(config.entry_module, "interp");
		assert_eq!(config.sample, "draw Tom;");
		assert!(!config.assist.auto_pair);
		assert!(config.assist.smart_newline);
		assert_eq!(
			config.sources,
			vec![InterpreterSource {
				name: "interp.py".into(),
				url: "https://example.invalid/interp.py".into(),
			}]
		);
	}

	#[test]
	fn test_invalid_document() {
		let err = PlaygroundConfig::from_toml_str("sources = 3").unwrap_err();
		assert!(matches!(err, PlaygroundError::Config(_)));
		assert!(err.to_string().starts_with("invalid playground config"));
	}
}
