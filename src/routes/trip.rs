use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, models::trip::TripRecord, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route("/api/trip", get(trip_get).put(trip_put))
        .route("/api/trip/reset", post(trip_reset))
}

async fn trip_get(State(state): State<AppState>) -> Json<TripRecord> {
    Json(state.storage.load_trip().await)
}

/// Replaces the whole document. There is deliberately no finer-grained write:
/// last writer wins at document granularity, same as the backing store.
async fn trip_put(
    State(state): State<AppState>,
    Json(record): Json<TripRecord>,
) -> Json<TripRecord> {
    state.storage.save_trip(&record).await;
    Json(state.storage.load_trip().await)
}

async fn trip_reset(State(state): State<AppState>) -> Json<TripRecord> {
    Json(state.storage.reset_trip().await)
}

#[derive(Deserialize)]
struct LandingQuery {
    room: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LandingInfo {
    connected: bool,
    room_id: Option<String>,
}

/// Landing endpoint. A `?room=` query parameter is the one-shot auto-join
/// signal carried by share links; it is consumed here and never re-checked.
async fn landing(
    State(state): State<AppState>,
    Query(query): Query<LandingQuery>,
) -> Result<Json<LandingInfo>, AppError> {
    if let Some(room_id) = query
        .room
        .as_deref()
        .map(str::trim)
        .filter(|room_id| !room_id.is_empty())
    {
        if state.sync.room_id().await.as_deref() != Some(room_id) {
            state.sync.join_room(room_id).await?;
        }
    }
    Ok(Json(LandingInfo {
        connected: state.sync.is_connected().await,
        room_id: state.sync.room_id().await,
    }))
}
