use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::fs;
use tracing::warn;

use crate::{error::AppError, models::trip::TripRecord};

const TRIP_FILE: &str = "trip.json";
const ROOM_FILE: &str = "sync_room";

/// Whole-document persistence for the trip record plus the room binding.
///
/// Trip reads and writes never fail upward: a broken or missing document
/// degrades to defaults on load, a failed write is logged and dropped. The
/// document is always replaced as one unit.
#[derive(Clone)]
pub struct StorageService {
    root: Arc<PathBuf>,
}

impl StorageService {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_structure(&self) -> Result<(), AppError> {
        fs::create_dir_all(self.root()).await?;
        Ok(())
    }

    fn trip_path(&self) -> PathBuf {
        self.root().join(TRIP_FILE)
    }

    fn room_path(&self) -> PathBuf {
        self.root().join(ROOM_FILE)
    }

    pub async fn load_trip(&self) -> TripRecord {
        let path = self.trip_path();
        let raw = match fs::read(&path).await {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!("could not read {}: {err}", path.display());
                }
                return TripRecord::default();
            }
        };
        if raw.is_empty() {
            return TripRecord::default();
        }
        match serde_json::from_slice(&raw) {
            Ok(record) => record,
            Err(err) => {
                warn!("stored trip document is malformed, using defaults: {err}");
                TripRecord::default()
            }
        }
    }

    pub async fn save_trip(&self, record: &TripRecord) {
        let data = match serde_json::to_vec_pretty(record) {
            Ok(data) => data,
            Err(err) => {
                warn!("could not serialize trip document: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(self.trip_path(), data).await {
            warn!("could not persist trip document: {err}");
        }
    }

    /// Drops the stored document and hands back a fresh default record.
    pub async fn reset_trip(&self) -> TripRecord {
        if let Err(err) = fs::remove_file(self.trip_path()).await {
            if err.kind() != ErrorKind::NotFound {
                warn!("could not reset trip document: {err}");
            }
        }
        TripRecord::default()
    }

    pub async fn load_room_binding(&self) -> Option<String> {
        let raw = fs::read_to_string(self.room_path()).await.ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub async fn store_room_binding(&self, room_id: &str) -> Result<(), AppError> {
        fs::write(self.room_path(), room_id).await?;
        Ok(())
    }

    pub async fn clear_room_binding(&self) {
        if let Err(err) = fs::remove_file(self.room_path()).await {
            if err.kind() != ErrorKind::NotFound {
                warn!("could not clear room binding: {err}");
            }
        }
    }
}
