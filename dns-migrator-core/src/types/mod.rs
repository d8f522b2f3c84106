//! Core data types

mod migration;
mod statistics;

pub use migration::ZoneMigrationResult;
pub use statistics::RecordTypeCounts;
