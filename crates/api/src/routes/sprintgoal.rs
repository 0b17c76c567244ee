//! Route definitions for sprint goals.

use axum::routing::get;
use axum::Router;

use crate::handlers::sprintgoal;
use crate::state::AppState;

/// Sprint goal routes.
///
/// ```text
/// GET    /sprintgoals/       -> list_sprintgoals
/// POST   /sprintgoals/       -> create_sprintgoal
/// GET    /sprintgoals/{id}   -> get_sprintgoal
/// PUT    /sprintgoals/{id}   -> update_sprintgoal
/// DELETE /sprintgoals/{id}   -> delete_sprintgoal
/// ```
///
/// The collection is also served without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/sprintgoals/",
            get(sprintgoal::list_sprintgoals).post(sprintgoal::create_sprintgoal),
        )
        .route(
            "/sprintgoals",
            get(sprintgoal::list_sprintgoals).post(sprintgoal::create_sprintgoal),
        )
        .route(
            "/sprintgoals/{id}",
            get(sprintgoal::get_sprintgoal)
                .put(sprintgoal::update_sprintgoal)
                .delete(sprintgoal::delete_sprintgoal),
        )
}
