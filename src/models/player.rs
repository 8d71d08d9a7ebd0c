//! Player data structures and the rest sub-state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in game records and lookups).
pub type PlayerId = Uuid;

/// Default rest length (games to sit out after playing) when none is set.
pub const DEFAULT_REST_PREFERENCE: u32 = 1;

/// Longest rest length a player may configure.
pub const MAX_REST_PREFERENCE: u32 = 3;

/// Legacy status view of a player, derived from [`RestState`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Active,
    Resting,
    Left,
}

/// Authoritative rest sub-state of a player.
///
/// The session layer historically kept a `status` enum and a
/// `rest_games_remaining` countdown side by side; both are views over this
/// single state (`status()` / `rest_games_remaining()` on [`Player`]).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestState {
    /// May be assigned to a court this cycle.
    #[default]
    Eligible,
    /// Must sit out this many more completed games (always >= 1).
    CoolingDown(u32),
    /// Has left the session; terminal.
    Left,
}

fn default_rest_preference() -> u32 {
    DEFAULT_REST_PREFERENCE
}

/// A player in the session roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// When the player joined the session (queue tie-break: earliest first).
    pub joined_at: DateTime<Utc>,
    /// Sequence number of the most recent game this player appeared in.
    pub last_game_number: u32,
    #[serde(default)]
    pub rest: RestState,
    /// How many games to sit out after playing (1-3).
    #[serde(default = "default_rest_preference")]
    pub rest_preference: u32,
    /// Manual queue override; lower means sooner. None for normal ordering.
    #[serde(default)]
    pub queue_position: Option<u32>,
}

impl Player {
    /// Create a new player with the given name, joining now. Stats start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            games_played: 0,
            wins: 0,
            losses: 0,
            joined_at: Utc::now(),
            last_game_number: 0,
            rest: RestState::Eligible,
            rest_preference: DEFAULT_REST_PREFERENCE,
            queue_position: None,
        }
    }

    /// Legacy status enum, derived from the rest state.
    pub fn status(&self) -> PlayerStatus {
        match self.rest {
            RestState::Eligible => PlayerStatus::Active,
            RestState::CoolingDown(_) => PlayerStatus::Resting,
            RestState::Left => PlayerStatus::Left,
        }
    }

    /// Remaining rest countdown, derived from the rest state.
    pub fn rest_games_remaining(&self) -> u32 {
        match self.rest {
            RestState::CoolingDown(n) => n,
            RestState::Eligible | RestState::Left => 0,
        }
    }

    /// Whether this player may be placed on a court this cycle.
    pub fn is_eligible(&self) -> bool {
        self.rest == RestState::Eligible
    }

    /// Win rate over recorded games; 0.5 for a player with no games yet.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.5
        } else {
            f64::from(self.wins) / f64::from(self.games_played)
        }
    }
}
