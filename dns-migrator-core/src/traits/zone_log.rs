//! 迁移记录持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Append-only log of migrated zones.
///
/// Platform implementations:
/// - CLI: `FileZoneLog` (`zones.info` / `zones.err` in the output directory)
#[async_trait]
pub trait ZoneLog: Send + Sync {
    /// Record a created zone and the nameservers it was delegated to.
    ///
    /// The file-backed log writes the zone name, each nameserver on its own
    /// line, then a blank line.
    async fn append_zone_info(&self, zone: &str, name_servers: &[String]) -> CoreResult<()>;

    /// Record a zone whose migration failed.
    async fn append_zone_error(&self, zone: &str, error: &str) -> CoreResult<()>;
}
