//! Platform adapters for the CLI
//!
//! - **`FileZoneLog`**: appends to `zones.info` / `zones.err` in the output directory.
//! - **`NoOpZoneLog`**: discards everything; used by read-only commands.

mod file_zone_log;

pub use file_zone_log::{FileZoneLog, NoOpZoneLog};
