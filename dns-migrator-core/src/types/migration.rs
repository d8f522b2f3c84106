//! Migration result types

use dns_migrator_provider::ChangeInfo;
use serde::Serialize;

/// Outcome of migrating one zone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneMigrationResult {
    /// Zone name as read from the input.
    pub zone: String,
    /// Hosted zone id assigned by the target (without the `/hostedzone/` prefix).
    pub zone_id: String,
    /// Change id of the zone creation (without the `/change/` prefix).
    pub change_id: String,
    /// Whether the zone creation was already in sync.
    pub insync: bool,
    /// Nameservers delegated to the new zone.
    pub name_servers: Vec<String>,
    /// Source records examined.
    pub records_seen: usize,
    /// Source records that could not be migrated.
    pub records_dropped: usize,
    /// Entries in the submitted batch.
    pub entries: usize,
    /// Result of the change-batch submission.
    pub submission: ChangeInfo,
}
