//! Game and match history records (read-only inputs to the engine).

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = Uuid;

/// Unique identifier for a best-of-N match.
pub type MatchId = Uuid;

/// Which team won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    One,
    Two,
}

/// Whether a game (or match) has finished.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Completed,
}

/// One completed or in-progress doubles game.
///
/// Immutable once completed; the engine only reads these for partnership
/// counts and recency, never writes them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    /// Sequence number within the session (1-based).
    pub number: u32,
    pub team_1: [PlayerId; 2],
    pub team_2: [PlayerId; 2],
    /// None while in progress or if never recorded.
    pub winner: Option<Team>,
    pub status: GameStatus,
}

impl GameRecord {
    pub fn new(number: u32, team_1: [PlayerId; 2], team_2: [PlayerId; 2]) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            team_1,
            team_2,
            winner: None,
            status: GameStatus::InProgress,
        }
    }

    /// All four participants, team 1 first.
    pub fn participants(&self) -> [PlayerId; 4] {
        [self.team_1[0], self.team_1[1], self.team_2[0], self.team_2[1]]
    }

    pub fn is_completed(&self) -> bool {
        self.status == GameStatus::Completed
    }
}

/// A best-of-N aggregate over games; only its completion feeds the metrics.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub game_ids: Vec<GameId>,
    pub best_of: u32,
    pub winner: Option<Team>,
    pub status: GameStatus,
}
