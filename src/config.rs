use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use url::Url;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub data_root: PathBuf,
    pub sync_api_base: Url,
    pub public_base_url: Url,
    pub poll_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let data_root = env::var("DATA_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let sync_api_base: Url = env::var("SYNC_API_BASE")
            .unwrap_or_else(|_| "https://jsonblob.com/api/jsonBlob".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid SYNC_API_BASE: {err}")))?;

        let public_base_url: Url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://{listen_addr}/"))
            .parse()
            .map_err(|err| AppError::Config(format!("invalid PUBLIC_BASE_URL: {err}")))?;

        let poll_interval = match env::var("SYNC_POLL_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|err| AppError::Config(format!("invalid SYNC_POLL_SECS: {err}")))?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(8),
        };

        Ok(Self {
            listen_addr,
            data_root,
            sync_api_base,
            public_base_url,
            poll_interval,
        })
    }
}
