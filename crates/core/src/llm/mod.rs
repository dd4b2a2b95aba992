// crates/core/src/llm/mod.rs
//! Asset-generation collaborator interface.
//!
//! The relay treats the LLM layer as a function that turns a prompt
//! into a structured asset document or an error. Prompt construction,
//! streaming parse, and JSON repair all live upstream; this module
//! only defines the seam and a thin HTTP binding to it.

pub mod config;
pub mod provider;
pub mod remote;
pub mod types;

pub use config::GeneratorConfig;
pub use provider::AssetGenerator;
pub use remote::{DisabledGenerator, RemoteGenerator};
pub use types::{AssetRequest, GeneratorError};
