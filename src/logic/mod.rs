//! Rotation engine logic: scoring, search, queue ordering, rest transitions.

mod queue;
mod rest;
mod rotation;
mod scoring;
mod search;

pub use queue::{eligible_in_order, queue_priority, RotationStrategy};
pub use rest::{
    adjust_queue_position, advance, make_ready, set_rest_preference, skip_next_game,
    swap_queue_positions,
};
pub use rotation::{generate_optimal_rotation, rotation_explanation};
pub use scoring::{fairness_score, partnership_counts, variance};
pub use search::{find_best_foursome, Foursome};
