//! Repository for the `sprintgoals` table.

use sprintboard_core::types::DbId;
use sqlx::PgConnection;

use crate::models::sprintgoal::{CreateSprintgoal, Sprintgoal, UpdateSprintgoal};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, status";

/// Provides CRUD operations for sprint goals.
pub struct SprintgoalRepo;

impl SprintgoalRepo {
    /// Insert a new sprint goal, returning the created row with its generated id.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateSprintgoal,
    ) -> Result<Sprintgoal, sqlx::Error> {
        let query = format!(
            "INSERT INTO sprintgoals (description, status)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprintgoal>(&query)
            .bind(&input.description)
            .bind(input.status.as_str())
            .fetch_one(&mut *conn)
            .await
    }

    /// List all sprint goals in insertion order.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Sprintgoal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sprintgoals ORDER BY id");
        sqlx::query_as::<_, Sprintgoal>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Find a sprint goal by its id.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Sprintgoal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sprintgoals WHERE id = $1");
        sqlx::query_as::<_, Sprintgoal>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Replace the description and status of a sprint goal.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateSprintgoal,
    ) -> Result<Option<Sprintgoal>, sqlx::Error> {
        let query = format!(
            "UPDATE sprintgoals SET
                description = $2,
                status = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprintgoal>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.status.as_str())
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a sprint goal by id. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sprintgoals WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
