use crate::types::DbId;

/// Domain error kinds raised below the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row with the given id exists.
    #[error("{entity} not found (id {id})")]
    NotFound { entity: &'static str, id: DbId },

    /// Input rejected before it reached storage.
    #[error("Validation failed: {0}")]
    Validation(String),
}
