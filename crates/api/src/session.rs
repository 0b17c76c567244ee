//! Per-request storage session.
//!
//! A [`DbSession`] checks one connection out of the pool and holds it for the
//! duration of a single handler's storage work. The connection goes back to
//! the pool when the session is dropped, which happens on every exit path of
//! the handler: normal return, early `?` return, or panic unwind.

use std::ops::{Deref, DerefMut};
use std::time::Instant;

use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};

use sprintboard_db::DbPool;

use crate::error::AppResult;

/// One pooled connection scoped to a single request.
///
/// Derefs to [`PgConnection`] so it can be passed straight to repository
/// methods:
///
/// ```ignore
/// let mut session = DbSession::open(&state.pool).await?;
/// let goals = SprintgoalRepo::list(&mut session).await?;
/// ```
pub struct DbSession {
    conn: PoolConnection<Postgres>,
    opened_at: Instant,
}

impl DbSession {
    /// Acquire a connection from the pool.
    pub async fn open(pool: &DbPool) -> AppResult<Self> {
        let conn = pool.acquire().await?;
        tracing::debug!(pool_size = pool.size(), "Storage session opened");
        Ok(Self {
            conn,
            opened_at: Instant::now(),
        })
    }
}

impl Deref for DbSession {
    type Target = PgConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        // The inner PoolConnection returns itself to the pool when it drops
        // right after this.
        tracing::debug!(
            held_ms = self.opened_at.elapsed().as_millis() as u64,
            "Storage session released"
        );
    }
}
