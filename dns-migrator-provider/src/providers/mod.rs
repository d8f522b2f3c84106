//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod dynect;
mod route53;

pub use dynect::{DynectProvider, DynectProviderBuilder};
pub use route53::{Route53Provider, Route53ProviderBuilder};
