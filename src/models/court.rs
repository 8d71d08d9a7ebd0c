//! Court data (availability is computed by the caller per invocation).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a court.
pub type CourtId = Uuid;

/// A playable court. `is_available` is supplied by the caller, e.g. courts
/// not currently hosting an in-progress game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    pub is_available: bool,
}

impl Court {
    /// Create an available court with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_available: true,
        }
    }
}
