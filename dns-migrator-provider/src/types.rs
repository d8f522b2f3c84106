use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============ Provider Types ============

/// Identifies which source (legacy) DNS provider implementation to use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Dyn Managed DNS (`DynECT`) REST API.
    Dynect,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dynect => write!(f, "dynect"),
        }
    }
}

impl std::str::FromStr for ProviderType {
    type Err = CredentialValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynect" => Ok(Self::Dynect),
            other => Err(CredentialValidationError::InvalidFormat {
                provider: other.to_string(),
                field: "connector".to_string(),
                label: "Connector".to_string(),
                reason: format!("Connector '{other}' is not supported."),
            }),
        }
    }
}

/// Identifies which target DNS hosting service to migrate into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// AWS Route 53.
    Route53,
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Route53 => write!(f, "route53"),
        }
    }
}

// ============ Source Types ============

/// Zone metadata as reported by the source provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceZone {
    /// Zone name (e.g., `"example.com"`).
    pub name: String,
    /// Current SOA serial.
    pub serial: u64,
    /// Serial numbering style (`"increment"`, `"epoch"`, `"day"`, `"minute"`).
    pub serial_style: String,
    /// Zone type (`"Primary"` / `"Secondary"`).
    pub zone_type: String,
}

/// Type-specific data of a source record.
///
/// Supported kinds carry exactly the fields needed to render the target value.
/// Records the migration cannot carry over are still represented, so callers
/// can count and report them instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// IPv4 address record.
    A {
        /// IPv4 address (e.g., `"1.2.3.4"`).
        address: String,
    },

    /// Text record.
    TXT {
        /// Unquoted text content.
        text: String,
    },

    /// Provider-side apex alias (flattened CNAME).
    ALIAS {
        /// Alias target hostname.
        alias: String,
    },

    /// Reverse-lookup pointer.
    PTR {
        /// Pointer target domain.
        ptrdname: String,
    },

    /// Canonical name record.
    CNAME {
        /// Canonical target hostname.
        cname: String,
    },

    /// Mail exchange record.
    MX {
        /// Preference (lower = preferred).
        preference: u16,
        /// Mail server hostname.
        exchange: String,
    },

    /// Service locator record.
    SRV {
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target hostname providing the service.
        target: String,
    },

    /// Legacy SPF record; same text layout as TXT.
    SPF {
        /// Unquoted SPF policy text.
        text: String,
    },

    /// A record type the migration does not carry over (AAAA, NS, SOA, ...).
    Unsupported {
        /// Uppercased type as reported by the provider.
        record_type: String,
    },

    /// A supported type whose rdata lacks a required field or has the wrong shape.
    Incomplete {
        /// Uppercased type as reported by the provider.
        record_type: String,
        /// Name of the first offending rdata field.
        missing: String,
    },
}

impl RecordData {
    /// Returns the uppercase record type name for this data.
    pub fn record_type(&self) -> &str {
        match self {
            Self::A { .. } => "A",
            Self::TXT { .. } => "TXT",
            Self::ALIAS { .. } => "ALIAS",
            Self::PTR { .. } => "PTR",
            Self::CNAME { .. } => "CNAME",
            Self::MX { .. } => "MX",
            Self::SRV { .. } => "SRV",
            Self::SPF { .. } => "SPF",
            Self::Unsupported { record_type } | Self::Incomplete { record_type, .. } => {
                record_type
            }
        }
    }
}

/// A DNS record as fetched from the source provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Record type as reported by the provider (e.g., `"A"`, `"MX"`).
    pub record_type: String,
    /// Fully qualified owner name.
    pub fqdn: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Parsed type-specific data.
    pub data: RecordData,
    /// Raw provider rdata object, kept for display.
    pub rdata: serde_json::Value,
}

// ============ Target Types ============

/// Action of a single change-batch entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Create a new record set; fails if it already exists.
    Create,
    /// Delete an existing record set.
    Delete,
    /// Create or replace a record set.
    Upsert,
}

impl ChangeAction {
    /// Wire name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Delete => "DELETE",
            Self::Upsert => "UPSERT",
        }
    }
}

/// One value of a resource record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Value string in the target's presentation format.
    #[serde(rename = "Value")]
    pub value: String,
}

/// A set of same-name, same-type records sharing one TTL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    /// Owner name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Uppercase record type.
    #[serde(rename = "Type")]
    pub record_type: String,
    /// Time to live in seconds.
    #[serde(rename = "TTL")]
    pub ttl: u32,
    /// Values, in insertion order.
    #[serde(rename = "ResourceRecords")]
    pub resource_records: Vec<ResourceRecord>,
}

/// One entry of a [`ChangeBatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// What to do with the record set.
    #[serde(rename = "Action")]
    pub action: ChangeAction,
    /// The record set the action applies to.
    #[serde(rename = "ResourceRecordSet")]
    pub resource_record_set: ResourceRecordSet,
}

/// Ordered list of changes submitted to a hosted zone in one call.
///
/// Serializes to the shape
/// `{"Changes":[{"Action":"CREATE","ResourceRecordSet":{"Name":..,"Type":..,"TTL":..,"ResourceRecords":[{"Value":..}]}}]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeBatch {
    /// Changes, applied in order.
    #[serde(rename = "Changes")]
    pub changes: Vec<Change>,
}

impl ChangeBatch {
    /// Whether the batch contains no change.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Request to create a hosted zone on the target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHostedZoneRequest {
    /// Zone name (e.g., `"example.com"`).
    pub name: String,
    /// Unique idempotency token for the creation request.
    pub caller_reference: String,
    /// Optional free-text comment stored with the zone.
    pub comment: Option<String>,
}

/// Status of a submitted change, as reported by the target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeInfo {
    /// Change identifier with the `/change/` prefix stripped.
    pub id: String,
    /// `"PENDING"` or `"INSYNC"`.
    pub status: String,
    /// Submission time as reported by the target, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    /// Comment echoed back by the target, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ChangeInfo {
    /// Whether the change has propagated to all authoritative servers.
    pub fn is_insync(&self) -> bool {
        self.status == "INSYNC"
    }
}

/// Outcome of a hosted-zone creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedZoneCreation {
    /// Hosted zone identifier with the `/hostedzone/` prefix stripped.
    pub zone_id: String,
    /// Zone name as echoed back by the target.
    pub zone_name: String,
    /// The zone-creation change.
    pub change: ChangeInfo,
    /// Delegated name servers, in the order the target reports them.
    pub name_servers: Vec<String>,
}

// ============ Credential Types ============

/// Validation error for provider credentials.
///
/// Returned when credential fields are missing, empty, or have an invalid format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Which provider the error relates to.
        provider: String,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: String,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field has an invalid format.
    InvalidFormat {
        /// Which provider the error relates to.
        provider: String,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField {
                provider, label, ..
            } => write!(f, "[{provider}] Missing required field: {label}"),
            Self::EmptyField {
                provider, label, ..
            } => write!(f, "[{provider}] Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Obtain required fields from `HashMap` and verify that it is not empty
fn get_required_field(
    provider: &str,
    map: &HashMap<String, String>,
    key: &str,
    label: &str,
) -> Result<String, CredentialValidationError> {
    match map.get(key) {
        None => Err(CredentialValidationError::MissingField {
            provider: provider.to_string(),
            field: key.to_string(),
            label: label.to_string(),
        }),
        Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
            provider: provider.to_string(),
            field: key.to_string(),
            label: label.to_string(),
        }),
        Some(v) => Ok(v.clone()),
    }
}

/// Credentials for the source provider.
///
/// Pass this to [`create_source_provider()`](crate::create_source_provider).
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum SourceCredentials {
    /// Dyn Managed DNS credentials.
    #[serde(rename = "dynect")]
    Dynect {
        /// Customer (account) name.
        customer: String,
        /// API user name.
        username: String,
        /// API user password.
        password: String,
    },
}

impl std::fmt::Debug for SourceCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dynect {
                customer, username, ..
            } => f
                .debug_struct("Dynect")
                .field("customer", customer)
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

impl SourceCredentials {
    /// Build credentials from a flat key-value map (e.g., a config file section).
    ///
    /// Keys for `dynect`: `customer`, `username`, `password`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is missing or empty.
    pub fn from_map(
        provider: ProviderType,
        map: &HashMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        let name = provider.to_string();
        match provider {
            ProviderType::Dynect => Ok(Self::Dynect {
                customer: get_required_field(&name, map, "customer", "Customer Name")?,
                username: get_required_field(&name, map, "username", "User Name")?,
                password: get_required_field(&name, map, "password", "Password")?,
            }),
        }
    }

    /// Returns the [`ProviderType`] corresponding to this credential variant.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::Dynect { .. } => ProviderType::Dynect,
        }
    }
}

/// Credentials for the target DNS service.
///
/// Pass this to [`create_target_provider()`](crate::create_target_provider).
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum TargetCredentials {
    /// AWS credentials for Route 53.
    #[serde(rename = "route53")]
    Route53 {
        /// AWS access key id.
        access_key_id: String,
        /// AWS secret access key.
        secret_access_key: String,
    },
}

impl std::fmt::Debug for TargetCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Route53 { access_key_id, .. } => f
                .debug_struct("Route53")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"***")
                .finish(),
        }
    }
}

impl TargetCredentials {
    /// Build credentials from a flat key-value map.
    ///
    /// Keys for `route53`: `aws_access_key_id`, `aws_secret_access_key`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is missing or empty.
    pub fn from_map(
        target: TargetType,
        map: &HashMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        let name = target.to_string();
        match target {
            TargetType::Route53 => Ok(Self::Route53 {
                access_key_id: get_required_field(
                    &name,
                    map,
                    "aws_access_key_id",
                    "AWS Access Key ID",
                )?,
                secret_access_key: get_required_field(
                    &name,
                    map,
                    "aws_secret_access_key",
                    "AWS Secret Access Key",
                )?,
            }),
        }
    }
}
