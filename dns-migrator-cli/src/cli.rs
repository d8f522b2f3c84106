//! Command-line definition

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dns_migrator_provider::ProviderType;

pub const DEFAULT_CONFIG: &str = "/app/config.json";
pub const DEFAULT_LOG_FILE: &str = "/app/dns.log";
pub const DEFAULT_OUTPUT_DIR: &str = "/app/output_files";

#[derive(Parser, Debug)]
#[command(name = "dns-migrator")]
#[command(about = "Migrate DNS zones from a legacy provider to Route 53", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Source DNS account, e.g. dynect
    #[arg(value_enum)]
    pub connector: Connector,

    /// Command to run
    #[arg(value_enum)]
    pub command: Command,

    /// Entity to run the command on
    #[arg(value_enum)]
    pub entity: Entity,

    /// Name of the zone
    #[arg(long)]
    pub zone_name: Option<String>,

    /// File with one zone name per line, for bulk operations
    #[arg(long)]
    pub input_file: Option<PathBuf>,

    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Application log file
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Directory receiving zones.info and zones.err
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connector {
    Dynect,
}

impl Connector {
    pub fn name(self) -> &'static str {
        match self {
            Self::Dynect => "dynect",
        }
    }

    pub fn provider_type(self) -> ProviderType {
        match self {
            Self::Dynect => ProviderType::Dynect,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Get,
    Migrate,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Migrate => "migrate",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Zone,
    Zones,
    Records,
    Statistics,
}

impl Entity {
    pub fn name(self) -> &'static str {
        match self {
            Self::Zone => "zone",
            Self::Zones => "zones",
            Self::Records => "records",
            Self::Statistics => "statistics",
        }
    }
}
