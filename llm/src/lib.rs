//! Unified generation interface types and traits.
//!
//! This crate provides the shared types used across all description
//! providers: `ProviderKind`, `ProviderConfig`, `GenerationOptions`,
//! `GeneratedResult`, `ProviderCapabilities`, the `ProviderError` taxonomy,
//! the template engine, the truncation policy, and the `Generator` trait
//! with its fixed generation pipeline.

pub use capabilities::ProviderCapabilities;
pub use config::{ConfigUpdate, ProviderConfig};
pub use error::{ErrorKind, ProviderError};
pub use generator::Generator;
pub use kind::ProviderKind;
pub use options::{DEFAULT_INPUT_LIMIT, GenerationOptions};
pub use result::{BackendOutput, GeneratedResult};
pub use reqwest::{self, Client};
pub use template::{DIFF_CONTENT, PLACEHOLDERS, Validation, substitute, validate};
pub use truncate::{TRUNCATION_MARKER, Truncated, truncate};

mod capabilities;
mod config;
mod error;
mod generator;
mod kind;
mod options;
mod result;
pub mod template;
pub mod truncate;
