use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::{
    data,
    models::schedule::{self, Countdown, LeaderboardEntry, RaceSession, SessionStatus},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/schedule", get(schedule_list))
        .route("/api/schedule/next", get(schedule_next))
        .route("/api/predictions/drivers", get(prediction_drivers))
        .route("/api/predictions/leaderboard", get(prediction_leaderboard))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    id: &'static str,
    name: &'static str,
    short_name: &'static str,
    day: &'static str,
    starts_at: DateTime<FixedOffset>,
    ends_at: DateTime<FixedOffset>,
    status: SessionStatus,
    countdown: Option<Countdown>,
    leave_by: DateTime<FixedOffset>,
}

fn session_view(session: &RaceSession, now: DateTime<Utc>) -> SessionView {
    SessionView {
        id: session.id,
        name: session.name,
        short_name: session.short_name,
        day: session.day,
        starts_at: session.starts_at,
        ends_at: session.ends_at(),
        status: session.status(now),
        countdown: schedule::countdown_to(session.starts_at, now),
        leave_by: session.leave_by(),
    }
}

async fn schedule_list() -> Json<Vec<SessionView>> {
    let now = Utc::now();
    let views = data::race_sessions()
        .iter()
        .map(|session| session_view(session, now))
        .collect();
    Json(views)
}

async fn schedule_next() -> Json<Option<SessionView>> {
    let now = Utc::now();
    let sessions = data::race_sessions();
    Json(schedule::next_session(&sessions, now).map(|session| session_view(session, now)))
}

async fn prediction_drivers() -> Json<Vec<&'static str>> {
    Json(data::DRIVERS.to_vec())
}

async fn prediction_leaderboard(State(state): State<AppState>) -> Json<Vec<LeaderboardEntry>> {
    let record = state.storage.load_trip().await;
    Json(schedule::leaderboard(
        &record.predictions,
        record.race_result.as_ref(),
    ))
}
