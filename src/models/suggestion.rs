//! Engine outputs: court suggestions, rotation results, fairness metrics.

use crate::models::court::Court;
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Errors that can occur during rotation operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RotationError {
    /// Fewer than 4 players handed to the foursome search.
    NotEnoughPlayers,
}

impl std::fmt::Display for RotationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationError::NotEnoughPlayers => {
                write!(f, "Need at least 4 available players to fill a court")
            }
        }
    }
}

impl std::error::Error for RotationError {}

/// A proposed next game on one court: two teams plus the fairness verdict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSuggestion {
    pub court: Court,
    pub team_1: [Player; 2],
    pub team_2: [Player; 2],
    /// Composite fairness score in 0..=100.
    pub fairness_score: u32,
    /// Human-readable reasons behind the score (for display).
    pub reasons: Vec<String>,
}

impl GameSuggestion {
    /// All four assigned players, team 1 first.
    pub fn players(&self) -> [&Player; 4] {
        [
            &self.team_1[0],
            &self.team_1[1],
            &self.team_2[0],
            &self.team_2[1],
        ]
    }
}

/// How often one unordered pair has partnered (completed games only).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PartnershipCount {
    /// The pair, in id order (smaller id first).
    pub players: [PlayerId; 2],
    pub games_together: u32,
}

/// Session-wide fairness metrics, computed over every player still present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FairnessMetrics {
    pub average_games_played: f64,
    pub games_played_variance: f64,
    /// Sorted by games_together descending, then by pair ids.
    pub partnerships: Vec<PartnershipCount>,
    pub matches_completed: u32,
}

/// One rotation cycle: suggestions per fillable court plus the waiting queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationResult {
    pub suggestions: Vec<GameSuggestion>,
    /// Remaining eligible players in queue order, truncated to 8.
    pub next_in_line: Vec<Player>,
    pub metrics: FairnessMetrics,
}
