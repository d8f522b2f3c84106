//! File-backed zone log

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dns_migrator_core::error::{CoreError, CoreResult};
use dns_migrator_core::traits::ZoneLog;
use tokio::sync::Mutex;

pub const ZONES_INFO: &str = "zones.info";
pub const ZONES_ERR: &str = "zones.err";

/// Appends migration results to `zones.info` and failures to `zones.err`.
///
/// Both files are opened once, in append mode, and held until drop.
pub struct FileZoneLog {
    info: Mutex<File>,
    info_path: PathBuf,
    err: Mutex<File>,
    err_path: PathBuf,
}

impl FileZoneLog {
    /// Open (creating if needed) both files under `output_dir`.
    pub fn open(output_dir: &Path) -> CoreResult<Self> {
        std::fs::create_dir_all(output_dir).map_err(|e| {
            CoreError::StorageError(format!("{}: {e}", output_dir.display()))
        })?;

        let info_path = output_dir.join(ZONES_INFO);
        let err_path = output_dir.join(ZONES_ERR);

        Ok(Self {
            info: Mutex::new(open_append(&info_path)?),
            info_path,
            err: Mutex::new(open_append(&err_path)?),
            err_path,
        })
    }
}

fn open_append(path: &Path) -> CoreResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CoreError::StorageError(format!("{}: {e}", path.display())))
}

fn write_entry(file: &mut File, path: &Path, entry: &str) -> CoreResult<()> {
    file.write_all(entry.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| CoreError::StorageError(format!("{}: {e}", path.display())))
}

#[async_trait]
impl ZoneLog for FileZoneLog {
    async fn append_zone_info(&self, zone: &str, name_servers: &[String]) -> CoreResult<()> {
        let mut entry = format!("{zone}\n");
        for ns in name_servers {
            entry.push_str(ns);
            entry.push('\n');
        }
        entry.push('\n');

        let mut file = self.info.lock().await;
        write_entry(&mut file, &self.info_path, &entry)
    }

    async fn append_zone_error(&self, zone: &str, error: &str) -> CoreResult<()> {
        let mut file = self.err.lock().await;
        write_entry(&mut file, &self.err_path, &format!("{zone}: {error}\n"))
    }
}

/// `NoOp` implementation of `ZoneLog`.
pub struct NoOpZoneLog;

#[async_trait]
impl ZoneLog for NoOpZoneLog {
    async fn append_zone_info(&self, _zone: &str, _name_servers: &[String]) -> CoreResult<()> {
        Ok(())
    }

    async fn append_zone_error(&self, _zone: &str, _error: &str) -> CoreResult<()> {
        Ok(())
    }
}
