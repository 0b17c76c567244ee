//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "detail": "..." }` confirmation body, matching the shape of error bodies.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: &'static str,
}
