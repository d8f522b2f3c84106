//! Source record → target change batch transformation
//!
//! Pure functions, no I/O. Records are grouped by `(TYPE, fqdn)`; the first
//! record of a group fixes the entry's TTL and position, later ones only add
//! their value.

use std::collections::HashMap;

use dns_migrator_provider::{
    Change, ChangeAction, ChangeBatch, RecordData, ResourceRecord, ResourceRecordSet,
    SourceRecord,
};
use serde::Serialize;

/// Outcome of [`RecordTransformer::build_change_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformReport {
    /// The batch to submit.
    pub batch: ChangeBatch,
    /// Number of source records examined.
    pub records_seen: usize,
    /// Number of records excluded (unsupported type or missing value).
    pub records_dropped: usize,
}

impl TransformReport {
    /// Number of change entries in the batch.
    pub fn entries(&self) -> usize {
        self.batch.changes.len()
    }
}

/// Maps source records to target change entries.
pub struct RecordTransformer;

impl RecordTransformer {
    /// Value string the target expects for this record, or `None` if the
    /// record cannot be migrated.
    pub fn value_for(data: &RecordData) -> Option<String> {
        match data {
            RecordData::A { address } => Some(address.clone()),
            RecordData::TXT { text } | RecordData::SPF { text } => Some(format!("\"{text}\"")),
            RecordData::ALIAS { alias } => Some(alias.clone()),
            RecordData::PTR { ptrdname } => Some(ptrdname.clone()),
            RecordData::CNAME { cname } => Some(cname.clone()),
            RecordData::MX {
                preference,
                exchange,
            } => Some(format!("{preference} {exchange}")),
            RecordData::SRV {
                priority,
                weight,
                port,
                target,
            } => Some(format!("{priority} {weight} {port} {target}")),
            RecordData::Unsupported { .. } | RecordData::Incomplete { .. } => None,
        }
    }

    /// Group records into one `CREATE` change per `(TYPE, fqdn)`, in order of
    /// first appearance.
    pub fn build_change_batch(records: &[SourceRecord]) -> TransformReport {
        let mut changes: Vec<Change> = Vec::new();
        let mut index: HashMap<(String, String), usize> = HashMap::new();
        let mut dropped = 0;

        for record in records {
            let Some(value) = Self::value_for(&record.data) else {
                log::warn!(
                    "Skipping {} record {}: {}",
                    record.record_type,
                    record.fqdn,
                    drop_reason(&record.data)
                );
                dropped += 1;
                continue;
            };

            let record_type = record.record_type.to_uppercase();
            let key = (record_type.clone(), record.fqdn.clone());

            if let Some(&pos) = index.get(&key) {
                changes[pos]
                    .resource_record_set
                    .resource_records
                    .push(ResourceRecord { value });
            } else {
                index.insert(key, changes.len());
                changes.push(Change {
                    action: ChangeAction::Create,
                    resource_record_set: ResourceRecordSet {
                        name: record.fqdn.clone(),
                        record_type,
                        ttl: record.ttl,
                        resource_records: vec![ResourceRecord { value }],
                    },
                });
            }
        }

        TransformReport {
            batch: ChangeBatch { changes },
            records_seen: records.len(),
            records_dropped: dropped,
        }
    }
}

fn drop_reason(data: &RecordData) -> String {
    match data {
        RecordData::Incomplete { missing, .. } => format!("missing rdata field '{missing}'"),
        _ => "unsupported type".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fqdn: &str, ttl: u32, data: RecordData) -> SourceRecord {
        SourceRecord {
            record_type: data.record_type().to_string(),
            fqdn: fqdn.to_string(),
            ttl,
            data,
            rdata: json!({}),
        }
    }

    fn a(fqdn: &str, address: &str) -> SourceRecord {
        record(
            fqdn,
            300,
            RecordData::A {
                address: address.to_string(),
            },
        )
    }

    fn txt(fqdn: &str, text: &str) -> SourceRecord {
        record(
            fqdn,
            300,
            RecordData::TXT {
                text: text.to_string(),
            },
        )
    }

    fn unsupported(fqdn: &str, record_type: &str) -> SourceRecord {
        record(
            fqdn,
            300,
            RecordData::Unsupported {
                record_type: record_type.to_string(),
            },
        )
    }

    fn values(change: &Change) -> Vec<&str> {
        change
            .resource_record_set
            .resource_records
            .iter()
            .map(|r| r.value.as_str())
            .collect()
    }

    // ---- value formats ----

    #[test]
    fn value_formats_per_type() {
        let cases = [
            (
                RecordData::A {
                    address: "1.2.3.4".into(),
                },
                "1.2.3.4",
            ),
            (
                RecordData::TXT {
                    text: "v=hello".into(),
                },
                "\"v=hello\"",
            ),
            (
                RecordData::ALIAS {
                    alias: "lb.example.net".into(),
                },
                "lb.example.net",
            ),
            (
                RecordData::PTR {
                    ptrdname: "host.example.com".into(),
                },
                "host.example.com",
            ),
            (
                RecordData::CNAME {
                    cname: "www.example.net".into(),
                },
                "www.example.net",
            ),
            (
                RecordData::MX {
                    preference: 10,
                    exchange: "mail.example.com".into(),
                },
                "10 mail.example.com",
            ),
            (
                RecordData::SRV {
                    priority: 10,
                    weight: 20,
                    port: 5060,
                    target: "sip.example.com".into(),
                },
                "10 20 5060 sip.example.com",
            ),
            (
                RecordData::SPF {
                    text: "v=spf1 -all".into(),
                },
                "\"v=spf1 -all\"",
            ),
        ];

        for (data, expected) in cases {
            assert_eq!(
                RecordTransformer::value_for(&data).as_deref(),
                Some(expected),
                "{data:?}"
            );
        }
    }

    #[test]
    fn non_migratable_data_has_no_value() {
        assert_eq!(
            RecordTransformer::value_for(&RecordData::Unsupported {
                record_type: "AAAA".into()
            }),
            None
        );
        assert_eq!(
            RecordTransformer::value_for(&RecordData::Incomplete {
                record_type: "MX".into(),
                missing: "exchange".into()
            }),
            None
        );
    }

    // ---- batch building ----

    #[test]
    fn single_a_record_batch_json() {
        let report = RecordTransformer::build_change_batch(&[a("a.example.com", "1.2.3.4")]);
        assert_eq!(
            serde_json::to_string(&report.batch).unwrap(),
            r#"{"Changes":[{"Action":"CREATE","ResourceRecordSet":{"Name":"a.example.com","Type":"A","TTL":300,"ResourceRecords":[{"Value":"1.2.3.4"}]}}]}"#
        );
        assert_eq!(report.records_seen, 1);
        assert_eq!(report.records_dropped, 0);
        assert_eq!(report.entries(), 1);
    }

    #[test]
    fn same_key_records_merge_in_order() {
        let report = RecordTransformer::build_change_batch(&[
            txt("example.com", "hello"),
            txt("example.com", "world"),
        ]);
        assert_eq!(report.entries(), 1);
        assert_eq!(
            values(&report.batch.changes[0]),
            vec!["\"hello\"", "\"world\""]
        );
    }

    #[test]
    fn mx_record_value() {
        let report = RecordTransformer::build_change_batch(&[record(
            "example.com",
            3600,
            RecordData::MX {
                preference: 10,
                exchange: "mail.example.com".into(),
            },
        )]);
        let set = &report.batch.changes[0].resource_record_set;
        assert_eq!(set.record_type, "MX");
        assert_eq!(set.ttl, 3600);
        assert_eq!(values(&report.batch.changes[0]), vec!["10 mail.example.com"]);
    }

    #[test]
    fn only_unsupported_records_yield_empty_batch() {
        let report = RecordTransformer::build_change_batch(&[unsupported("example.com", "AAAA")]);
        assert!(report.batch.is_empty());
        assert_eq!(
            serde_json::to_string(&report.batch).unwrap(),
            r#"{"Changes":[]}"#
        );
        assert_eq!(report.records_dropped, 1);
    }

    #[test]
    fn dropped_records_do_not_affect_other_entries() {
        let report = RecordTransformer::build_change_batch(&[
            a("a.example.com", "1.2.3.4"),
            unsupported("example.com", "NS"),
            record(
                "b.example.com",
                300,
                RecordData::Incomplete {
                    record_type: "CNAME".into(),
                    missing: "cname".into(),
                },
            ),
            a("a.example.com", "5.6.7.8"),
        ]);
        assert_eq!(report.records_seen, 4);
        assert_eq!(report.records_dropped, 2);
        assert_eq!(report.entries(), 1);
        assert_eq!(values(&report.batch.changes[0]), vec!["1.2.3.4", "5.6.7.8"]);
    }

    #[test]
    fn entries_follow_first_appearance() {
        let report = RecordTransformer::build_change_batch(&[
            a("b.example.com", "1.1.1.1"),
            txt("a.example.com", "x"),
            a("a.example.com", "2.2.2.2"),
            a("b.example.com", "3.3.3.3"),
        ]);
        let keys: Vec<(&str, &str)> = report
            .batch
            .changes
            .iter()
            .map(|c| {
                (
                    c.resource_record_set.record_type.as_str(),
                    c.resource_record_set.name.as_str(),
                )
            })
            .collect();
        assert_eq!(
            keys,
            vec![
                ("A", "b.example.com"),
                ("TXT", "a.example.com"),
                ("A", "a.example.com"),
            ]
        );
        assert_eq!(
            values(&report.batch.changes[0]),
            vec!["1.1.1.1", "3.3.3.3"]
        );
    }

    #[test]
    fn first_record_fixes_ttl() {
        let mut second = a("a.example.com", "5.6.7.8");
        second.ttl = 60;
        let report =
            RecordTransformer::build_change_batch(&[a("a.example.com", "1.2.3.4"), second]);
        assert_eq!(report.batch.changes[0].resource_record_set.ttl, 300);
    }

    #[test]
    fn lowercase_type_is_grouped_with_uppercase() {
        let mut lower = a("a.example.com", "5.6.7.8");
        lower.record_type = "a".to_string();
        let report =
            RecordTransformer::build_change_batch(&[a("a.example.com", "1.2.3.4"), lower]);
        assert_eq!(report.entries(), 1);
        assert_eq!(report.batch.changes[0].resource_record_set.record_type, "A");
    }

    #[test]
    fn same_input_gives_identical_json() {
        let records = vec![
            a("a.example.com", "1.2.3.4"),
            txt("example.com", "hello"),
            a("a.example.com", "5.6.7.8"),
        ];
        let first = serde_json::to_string(&RecordTransformer::build_change_batch(&records).batch)
            .unwrap();
        let second = serde_json::to_string(&RecordTransformer::build_change_batch(&records).batch)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input() {
        let report = RecordTransformer::build_change_batch(&[]);
        assert_eq!(report, TransformReport::default());
    }
}
