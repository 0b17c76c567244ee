pub mod health;
pub mod sprintgoal;

use axum::Router;

use crate::state::AppState;

/// Build the service route tree (mounted at the service root).
///
/// Route hierarchy:
///
/// ```text
/// /sprintgoals/                list, create
/// /sprintgoals/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(sprintgoal::router())
}
