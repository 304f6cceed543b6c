pub mod schedule;
pub mod sync;
pub mod trip;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(trip::router())
        .merge(schedule::router())
        .nest("/api/sync", sync::router())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
