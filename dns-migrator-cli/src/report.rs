//! Stdout reporting

use async_trait::async_trait;
use dns_migrator_core::services::{MigrationHooks, StatisticsHooks};
use dns_migrator_core::{RecordTypeCounts, ZoneMigrationResult};
use dns_migrator_provider::ChangeBatch;
use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

/// Prints each change batch before submission and each zone result after.
pub struct StdoutMigrationHooks;

#[async_trait]
impl MigrationHooks for StdoutMigrationHooks {
    async fn before_submit(&self, _zone: &str, batch: &ChangeBatch) {
        println!("{}", to_json(batch));
    }

    async fn zone_migrated(&self, result: &ZoneMigrationResult) {
        println!("{}", to_json(result));
    }
}

/// Prints the running per-type totals after each zone.
pub struct StdoutStatisticsHooks;

#[async_trait]
impl StatisticsHooks for StdoutStatisticsHooks {
    async fn zone_counted(&self, zone: &str, records: usize, totals: &RecordTypeCounts) {
        println!("{zone}: {records} record(s)");
        println!("{}", to_json(totals));
    }
}
