//! Playground session for authoring and running CADL programs.
//!
//! A [`Session`] ties the editing buffer and [`Assistant`](cadl_input::Assistant)
//! to a [`RuntimeLoader`], which boots an interpreter through host-provided
//! [`RuntimeHost`] and [`Fetcher`] implementations and runs the program text
//! resolved by [`ProgramSource`].

pub mod config;
pub mod error;
pub mod host;
pub mod loader;
pub mod session;
pub mod source;
pub mod status;

pub use config::{InterpreterSource, PlaygroundConfig};
pub use error::{HostError, PlaygroundError, Result};
pub use host::{FetchResponse, Fetcher, RuntimeHost};
pub use loader::{LoaderState, RuntimeLoader};
pub use session::Session;
pub use source::ProgramSource;
pub use status::Status;
