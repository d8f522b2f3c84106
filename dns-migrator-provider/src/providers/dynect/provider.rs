//! Dynect `SourceProvider` trait 实现

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::providers::common::normalize_domain_name;
use crate::traits::{ErrorContext, ProviderErrorMapper, SourceProvider};
use crate::types::{RecordData, SourceRecord, SourceZone};

use super::DynectProvider;
use super::session::DynSession;
use super::types::{AllRecordsData, DynRecord, DynZone, DynZoneListItem};

/// 读取字符串字段
fn str_field(rdata: &Value, field: &str) -> Option<String> {
    rdata.get(field).and_then(Value::as_str).map(str::to_string)
}

/// 读取数值字段（Dynect 偶尔以字符串返回数字）
fn u16_field(rdata: &Value, field: &str) -> Option<u16> {
    match rdata.get(field)? {
        Value::Number(n) => n.as_u64().and_then(|v| u16::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl DynectProvider {
    /// 将 Dynect rdata 解析为 `RecordData`
    ///
    /// 字段名：A `address`，TXT/SPF `txtdata`，ALIAS `alias`，PTR `ptrdname`，
    /// CNAME `cname`，MX `preference`/`exchange`，SRV `priority`/`weight`/`port`/`target`。
    pub(crate) fn parse_record_data(record_type: &str, rdata: &Value) -> RecordData {
        let record_type = record_type.to_uppercase();
        let incomplete = |field: &str| RecordData::Incomplete {
            record_type: record_type.clone(),
            missing: field.to_string(),
        };

        match record_type.as_str() {
            "A" => str_field(rdata, "address")
                .map_or_else(|| incomplete("address"), |address| RecordData::A { address }),
            "TXT" => str_field(rdata, "txtdata")
                .map_or_else(|| incomplete("txtdata"), |text| RecordData::TXT { text }),
            "SPF" => str_field(rdata, "txtdata")
                .map_or_else(|| incomplete("txtdata"), |text| RecordData::SPF { text }),
            "ALIAS" => str_field(rdata, "alias")
                .map_or_else(|| incomplete("alias"), |alias| RecordData::ALIAS { alias }),
            "PTR" => str_field(rdata, "ptrdname")
                .map_or_else(|| incomplete("ptrdname"), |ptrdname| RecordData::PTR { ptrdname }),
            "CNAME" => str_field(rdata, "cname")
                .map_or_else(|| incomplete("cname"), |cname| RecordData::CNAME { cname }),
            "MX" => {
                let Some(preference) = u16_field(rdata, "preference") else {
                    return incomplete("preference");
                };
                let Some(exchange) = str_field(rdata, "exchange") else {
                    return incomplete("exchange");
                };
                RecordData::MX {
                    preference,
                    exchange,
                }
            }
            "SRV" => {
                let Some(priority) = u16_field(rdata, "priority") else {
                    return incomplete("priority");
                };
                let Some(weight) = u16_field(rdata, "weight") else {
                    return incomplete("weight");
                };
                let Some(port) = u16_field(rdata, "port") else {
                    return incomplete("port");
                };
                let Some(target) = str_field(rdata, "target") else {
                    return incomplete("target");
                };
                RecordData::SRV {
                    priority,
                    weight,
                    port,
                    target,
                }
            }
            _ => RecordData::Unsupported {
                record_type: record_type.clone(),
            },
        }
    }

    fn convert_record(record: DynRecord) -> SourceRecord {
        let data = Self::parse_record_data(&record.record_type, &record.rdata);
        SourceRecord {
            record_type: record.record_type.to_uppercase(),
            fqdn: record.fqdn,
            ttl: record.ttl,
            data,
            rdata: record.rdata,
        }
    }

    /// 展开 `<type>_records` 分组，保持响应顺序
    pub(crate) fn flatten_records(&self, data: AllRecordsData) -> Result<Vec<SourceRecord>> {
        let mut records = Vec::new();
        for (key, group) in data {
            let group: Vec<DynRecord> = serde_json::from_value(group).map_err(|e| {
                log::error!("[dynect] Failed to parse record group '{key}': {e}");
                self.parse_error(format!("{key}: {e}"))
            })?;
            records.extend(group.into_iter().map(Self::convert_record));
        }
        Ok(records)
    }

    // ==================== 会话内操作 ====================

    async fn fetch_zone(&self, session: &DynSession, zone: &str) -> Result<SourceZone> {
        let path = format!("/Zone/{}/", urlencoding::encode(zone));
        let data: DynZone = self.get(session, &path, ErrorContext::zone(zone)).await?;
        Ok(SourceZone {
            name: normalize_domain_name(&data.zone),
            serial: data.serial,
            serial_style: data.serial_style,
            zone_type: data.zone_type,
        })
    }

    async fn fetch_zone_names(&self, session: &DynSession) -> Result<Vec<String>> {
        let items: Vec<DynZoneListItem> = self
            .get(session, "/Zone/", ErrorContext::default())
            .await?;
        Ok(items.iter().map(DynZoneListItem::zone_name).collect())
    }

    async fn fetch_records(&self, session: &DynSession, zone: &str) -> Result<Vec<SourceRecord>> {
        let path = format!("/AllRecord/{}/?detail=Y", urlencoding::encode(zone));
        let data: AllRecordsData = self.get(session, &path, ErrorContext::zone(zone)).await?;
        let records = self.flatten_records(data)?;
        log::debug!("[dynect] Fetched {} records for {zone}", records.len());
        Ok(records)
    }
}

#[async_trait]
impl SourceProvider for DynectProvider {
    fn id(&self) -> &'static str {
        "dynect"
    }

    async fn get_zone(&self, zone: &str) -> Result<SourceZone> {
        let session = self.open_session().await?;
        let result = self.fetch_zone(&session, zone).await;
        self.close_session(session).await;
        result
    }

    async fn list_zones(&self) -> Result<Vec<String>> {
        let session = self.open_session().await?;
        let result = self.fetch_zone_names(&session).await;
        self.close_session(session).await;
        result
    }

    async fn get_zone_records(&self, zone: &str) -> Result<Vec<SourceRecord>> {
        let session = self.open_session().await?;
        let result = self.fetch_records(&session, zone).await;
        self.close_session(session).await;
        result
    }
}
