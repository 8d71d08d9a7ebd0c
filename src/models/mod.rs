//! Data structures for the rotation engine: players, game history, courts, results.

mod court;
mod game;
mod player;
mod suggestion;

pub use court::{Court, CourtId};
pub use game::{GameId, GameRecord, GameStatus, MatchId, MatchRecord, Team};
pub use player::{
    Player, PlayerId, PlayerStatus, RestState, DEFAULT_REST_PREFERENCE, MAX_REST_PREFERENCE,
};
pub use suggestion::{
    FairnessMetrics, GameSuggestion, PartnershipCount, RotationError, RotationResult,
};
