use std::sync::Arc;

use crate::{
    config::AppConfig,
    services::{storage::StorageService, sync::SyncService},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: StorageService,
    pub sync: Arc<SyncService>,
}

impl AppState {
    pub fn new(config: AppConfig, storage: StorageService, sync: Arc<SyncService>) -> Self {
        Self {
            config,
            storage,
            sync,
        }
    }
}
