//! DNS Migrator Core Library
//!
//! Provides the migration logic on top of the provider clients:
//! - Record transformation (`RecordTransformer`)
//! - Zone migration (`MigrationService`)
//! - Record statistics (`StatisticsService`)
//! - Read-only zone queries (`ZoneService`)
//!
//! This library does no file or terminal I/O of its own; the frontend injects
//! the providers and a `ZoneLog` implementation through `ServiceContext`.

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod transform;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{AppConfig, Settings};
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::ZoneLog;
pub use transform::{RecordTransformer, TransformReport};
pub use types::{RecordTypeCounts, ZoneMigrationResult};
