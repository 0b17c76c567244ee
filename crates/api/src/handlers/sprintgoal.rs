//! Handlers for sprint goal CRUD.
//!
//! Each handler validates its input first, then opens exactly one
//! [`DbSession`] for its single read or write. The session is released when
//! the handler returns, whether it succeeds or fails.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use sprintboard_core::sprintgoal::{DELETED_MESSAGE, ENTITY_NAME};
use sprintboard_core::types::DbId;
use sprintboard_db::models::sprintgoal::{CreateSprintgoal, UpdateSprintgoal};
use sprintboard_db::repositories::SprintgoalRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::response::DetailResponse;
use crate::session::DbSession;
use crate::state::AppState;

/// POST /sprintgoals/
///
/// Create a new sprint goal. The id is assigned by the database.
pub async fn create_sprintgoal(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSprintgoal>,
) -> AppResult<impl IntoResponse> {
    let mut session = DbSession::open(&state.pool).await?;
    let goal = SprintgoalRepo::create(&mut session, &input).await?;

    tracing::info!(
        sprintgoal_id = goal.id,
        status = %goal.status,
        "Sprint goal created",
    );

    Ok(Json(goal))
}

/// GET /sprintgoals/
///
/// List all sprint goals in insertion order.
pub async fn list_sprintgoals(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut session = DbSession::open(&state.pool).await?;
    let goals = SprintgoalRepo::list(&mut session).await?;

    Ok(Json(goals))
}

/// GET /sprintgoals/{id}
pub async fn get_sprintgoal(
    State(state): State<AppState>,
    ValidatedPath(sprintgoal_id): ValidatedPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut session = DbSession::open(&state.pool).await?;
    let goal = SprintgoalRepo::find_by_id(&mut session, sprintgoal_id)
        .await?
        .ok_or(AppError::not_found(ENTITY_NAME, sprintgoal_id))?;

    Ok(Json(goal))
}

/// PUT /sprintgoals/{id}
///
/// Replace the description and status of an existing sprint goal.
pub async fn update_sprintgoal(
    State(state): State<AppState>,
    ValidatedPath(sprintgoal_id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateSprintgoal>,
) -> AppResult<impl IntoResponse> {
    let mut session = DbSession::open(&state.pool).await?;
    let goal = SprintgoalRepo::update(&mut session, sprintgoal_id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY_NAME, sprintgoal_id))?;

    tracing::info!(sprintgoal_id, status = %goal.status, "Sprint goal updated");

    Ok(Json(goal))
}

/// DELETE /sprintgoals/{id}
pub async fn delete_sprintgoal(
    State(state): State<AppState>,
    ValidatedPath(sprintgoal_id): ValidatedPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut session = DbSession::open(&state.pool).await?;
    let deleted = SprintgoalRepo::delete(&mut session, sprintgoal_id).await?;

    if !deleted {
        return Err(AppError::not_found(ENTITY_NAME, sprintgoal_id));
    }

    tracing::info!(sprintgoal_id, "Sprint goal deleted");

    Ok(Json(DetailResponse {
        detail: DELETED_MESSAGE,
    }))
}
