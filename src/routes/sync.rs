use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{error::AppError, services::sync, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/room", post(room_create).delete(room_disconnect))
        .route("/join", post(room_join))
        .route("/status", get(status))
        .route("/push", post(push))
        .route("/now", post(sync_now))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SyncStatus {
    connected: bool,
    room_id: Option<String>,
    share_url: Option<String>,
    generation: u64,
}

async fn sync_status(state: &AppState) -> SyncStatus {
    SyncStatus {
        connected: state.sync.is_connected().await,
        room_id: state.sync.room_id().await,
        share_url: state.sync.share_url().await.map(|url| url.to_string()),
        generation: state.sync.update_generation(),
    }
}

async fn status(State(state): State<AppState>) -> Json<SyncStatus> {
    Json(sync_status(&state).await)
}

async fn room_create(State(state): State<AppState>) -> Result<Json<SyncStatus>, AppError> {
    state.sync.create_room().await?;
    Ok(Json(sync_status(&state).await))
}

#[derive(Deserialize)]
struct JoinForm {
    room: String,
}

/// Accepts either a bare room id or a pasted share link.
async fn room_join(
    State(state): State<AppState>,
    Json(form): Json<JoinForm>,
) -> Result<Json<SyncStatus>, AppError> {
    let submitted = form.room.trim();
    let room_id = Url::parse(submitted)
        .ok()
        .as_ref()
        .and_then(sync::room_from_url)
        .unwrap_or_else(|| submitted.to_string());
    if room_id.is_empty() {
        return Err(AppError::BadRequest("missing room id".into()));
    }
    state.sync.join_room(&room_id).await?;
    Ok(Json(sync_status(&state).await))
}

async fn room_disconnect(State(state): State<AppState>) -> Json<SyncStatus> {
    state.sync.disconnect().await;
    Json(sync_status(&state).await)
}

async fn push(State(state): State<AppState>) -> Result<Json<SyncStatus>, AppError> {
    state.sync.push_group_change().await?;
    Ok(Json(sync_status(&state).await))
}

#[derive(Serialize)]
struct SyncOutcome {
    changed: bool,
}

async fn sync_now(State(state): State<AppState>) -> Result<Json<SyncOutcome>, AppError> {
    let changed = state.sync.sync_once().await?;
    Ok(Json(SyncOutcome { changed }))
}
