//! Court rotation engine: fairness scoring, foursome search, and player queue
//! ordering for recurring doubles sessions.
//!
//! The engine is a pure library: the caller supplies an immutable snapshot
//! (roster, game/match history, courts) and gets back per-court game
//! suggestions plus the ordered waiting queue. Persistence, transport, and
//! concurrent-write resolution belong to the hosting service.

pub mod logic;
pub mod models;

pub use logic::{
    adjust_queue_position, advance, eligible_in_order, fairness_score, find_best_foursome,
    generate_optimal_rotation, make_ready, partnership_counts, queue_priority,
    rotation_explanation, set_rest_preference, skip_next_game, swap_queue_positions, variance,
    Foursome, RotationStrategy,
};
pub use models::{
    Court, CourtId, FairnessMetrics, GameId, GameRecord, GameStatus, GameSuggestion, MatchId,
    MatchRecord, PartnershipCount, Player, PlayerId, PlayerStatus, RestState, RotationError,
    RotationResult, Team, DEFAULT_REST_PREFERENCE, MAX_REST_PREFERENCE,
};
