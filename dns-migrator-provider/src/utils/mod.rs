//! Utility modules.

/// Keeps secrets and oversized bodies out of logs.
pub mod log_sanitizer;
