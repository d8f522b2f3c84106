//! Dynect REST API type definition

use serde::{Deserialize, Serialize};

// ============ Envelope ============

/// Every Dynect REST response is wrapped in this envelope.
#[derive(Debug, Deserialize)]
pub struct DynResponse {
    /// `"success"`, `"failure"` or `"incomplete"`.
    pub status: String,
    #[serde(default)]
    pub data: serde_json::Value,
    pub job_id: Option<u64>,
    #[serde(default)]
    pub msgs: Vec<DynMessage>,
}

impl DynResponse {
    /// First message flagged as an error, falling back to the last message.
    pub fn error_message(&self) -> Option<&DynMessage> {
        self.msgs
            .iter()
            .find(|m| m.lvl.as_deref() == Some("ERROR"))
            .or_else(|| self.msgs.last())
    }
}

/// A single API message attached to a response.
#[derive(Debug, Deserialize)]
pub struct DynMessage {
    #[serde(rename = "INFO")]
    pub info: Option<String>,
    #[serde(rename = "ERR_CD")]
    pub err_cd: Option<String>,
    #[serde(rename = "LVL")]
    pub lvl: Option<String>,
}

// ============ Session ============

/// Request body of `POST /Session/`.
#[derive(Debug, Serialize)]
pub struct SessionRequest<'a> {
    pub customer_name: &'a str,
    pub user_name: &'a str,
    pub password: &'a str,
}

/// `data` of `POST /Session/`.
#[derive(Debug, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub version: Option<String>,
}

// ============ Zones ============

/// `data` of `GET /Zone/{zone}/`.
#[derive(Debug, Deserialize)]
pub struct DynZone {
    pub zone: String,
    #[serde(default)]
    pub serial: u64,
    #[serde(default)]
    pub serial_style: String,
    #[serde(default)]
    pub zone_type: String,
}

/// One item of `GET /Zone/`: either a resource URI or, with `detail=Y`, a zone object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DynZoneListItem {
    Uri(String),
    Detail(DynZone),
}

impl DynZoneListItem {
    /// Zone name of the item.
    ///
    /// URIs look like `/REST/Zone/example.com/`.
    pub fn zone_name(&self) -> String {
        match self {
            Self::Uri(uri) => uri
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string(),
            Self::Detail(zone) => zone.zone.clone(),
        }
    }
}

// ============ Records ============

/// A record as returned by `GET /AllRecord/{zone}/?detail=Y`.
#[derive(Debug, Deserialize)]
pub struct DynRecord {
    pub fqdn: String,
    pub record_type: String,
    pub ttl: u32,
    #[serde(default)]
    pub rdata: serde_json::Value,
}

/// `data` of `GET /AllRecord/{zone}/?detail=Y`: record arrays keyed by
/// `<type>_records`, in response order.
pub type AllRecordsData = serde_json::Map<String, serde_json::Value>;
