// crates/core/src/lib.rs
//! Studiobridge domain seams.
//!
//! Holds the interfaces the relay server consumes but does not own —
//! currently the asset-generation collaborator (the LLM invocation
//! layer) behind the `AssetGenerator` trait.

pub mod llm;

pub use llm::{AssetGenerator, AssetRequest, GeneratorConfig, GeneratorError};
