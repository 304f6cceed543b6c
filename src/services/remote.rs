use reqwest::{header, Client, StatusCode};
use url::Url;

use crate::{error::RemoteError, models::payload::SyncPayload};

/// Client for the shared room-document service: a REST-ish store of whole
/// JSON blobs. Three verbs, whole-document granularity, no retries; backoff
/// is the caller's problem if it ever wants any.
#[derive(Clone)]
pub struct RemoteStore {
    http: Client,
    base: Url,
}

impl RemoteStore {
    pub fn new(base: Url) -> Self {
        Self {
            http: Client::new(),
            base,
        }
    }

    fn document_url(&self, room_id: &str) -> Result<Url, RemoteError> {
        format!("{}/{room_id}", self.base.as_str().trim_end_matches('/'))
            .parse()
            .map_err(|err| RemoteError::Transport(format!("invalid document url: {err}")))
    }

    /// Creates a new document and returns the id the service assigned to it,
    /// taken from the last path segment of the `Location` response header.
    pub async fn create(&self, payload: &SyncPayload) -> Result<String, RemoteError> {
        let response = self.http.post(self.base.clone()).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(RemoteError::Transport(format!(
                "create returned {}",
                response.status()
            )));
        }
        let room_id = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|location| location.rsplit('/').next())
            .map(str::trim)
            .unwrap_or_default();
        if room_id.is_empty() {
            return Err(RemoteError::MissingRoomId);
        }
        Ok(room_id.to_string())
    }

    pub async fn fetch(&self, room_id: &str) -> Result<SyncPayload, RemoteError> {
        let response = self.http.get(self.document_url(room_id)?).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound);
        }
        if !response.status().is_success() {
            return Err(RemoteError::Transport(format!(
                "fetch returned {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    /// Idempotent full overwrite of an existing document.
    pub async fn replace(&self, room_id: &str, payload: &SyncPayload) -> Result<(), RemoteError> {
        let response = self
            .http
            .put(self.document_url(room_id)?)
            .json(payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(RemoteError::Transport(format!(
                "replace returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
