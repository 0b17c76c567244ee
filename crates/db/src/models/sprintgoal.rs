//! Sprint goal entity model and DTOs.

use serde::{Deserialize, Serialize};
use sprintboard_core::sprintgoal::{SprintgoalStatus, MAX_DESCRIPTION_LEN};
use sprintboard_core::types::DbId;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `sprintgoals` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Sprintgoal {
    pub id: DbId,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: SprintgoalStatus,
}

/// Request body for both create and update.
///
/// Update is a full replacement, so it takes the same required fields as
/// create. Unknown `status` values fail deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SprintgoalInput {
    /// At most [`MAX_DESCRIPTION_LEN`] characters.
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: String,
    pub status: SprintgoalStatus,
}

/// DTO for creating a new sprint goal.
pub type CreateSprintgoal = SprintgoalInput;

/// DTO for replacing an existing sprint goal's description and status.
pub type UpdateSprintgoal = SprintgoalInput;
