//! Storage layer abstraction trait definition

mod zone_log;

pub use zone_log::ZoneLog;
