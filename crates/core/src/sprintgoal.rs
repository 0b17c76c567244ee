//! Sprint goal domain constants and the status enum.
//!
//! The status is stored and transmitted as its variant name (`"Done"`,
//! `"Backlog"`, `"Pending"`). Parsing anything else fails with
//! [`CoreError::Validation`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Entity name used in not-found errors and log fields.
pub const ENTITY_NAME: &str = "Sprintgoal";

/// Maximum description length in characters (`VARCHAR(300)`).
pub const MAX_DESCRIPTION_LEN: u64 = 300;

/// Confirmation message returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Sprintgoal deleted";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state of a sprint goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SprintgoalStatus {
    Done,
    Backlog,
    Pending,
}

impl SprintgoalStatus {
    /// Every recognised status, in declaration order.
    pub const ALL: [SprintgoalStatus; 3] = [Self::Done, Self::Backlog, Self::Pending];

    /// The canonical string form, as stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::Backlog => "Backlog",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for SprintgoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SprintgoalStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|st| st.as_str()).collect();
                CoreError::Validation(format!(
                    "Unknown status: '{s}'. Valid statuses: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// Used by `sqlx::FromRow` to decode the `TEXT` status column.
impl TryFrom<String> for SprintgoalStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
