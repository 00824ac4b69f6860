//! Provider dispatch, registry and factory.
//!
//! The gateway between configuration and live adapters: [`build_provider`]
//! constructs a [`Provider`] from a [`ProviderKind`](llm::ProviderKind) and
//! config, and [`ProviderRegistry`] stores named instances with a default
//! pointer, fallback resolution and bulk health checks.

pub use factory::{ProviderInit, build_provider, create_and_register, initialize, with_fallback};
pub use provider::Provider;
pub use registry::{Discovered, Health, ProviderRegistry};

mod factory;
mod provider;
mod registry;
