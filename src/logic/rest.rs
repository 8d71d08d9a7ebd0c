//! Rest state transitions and queue-management actions.
//!
//! All functions here are pure transforms: they take player snapshots and
//! return updated copies for the caller to persist. `RestState::Left` is
//! terminal and untouched by every transform except where noted.

use crate::models::{Player, RestState, DEFAULT_REST_PREFERENCE, MAX_REST_PREFERENCE};

/// Advance a player's rest state after one completed game.
///
/// A player who just played records the game number and enters a mandatory
/// cooldown of `rest_preference` games. A player who sat out counts the
/// cooldown down by one, becoming eligible at zero.
pub fn advance(player: &Player, game_number: u32, played_this_game: bool) -> Player {
    let mut updated = player.clone();
    if updated.rest == RestState::Left {
        return updated;
    }
    if played_this_game {
        updated.last_game_number = game_number;
        let rest = updated
            .rest_preference
            .clamp(DEFAULT_REST_PREFERENCE, MAX_REST_PREFERENCE);
        updated.rest = RestState::CoolingDown(rest);
    } else if let RestState::CoolingDown(n) = updated.rest {
        updated.rest = if n <= 1 {
            RestState::Eligible
        } else {
            RestState::CoolingDown(n - 1)
        };
    }
    updated
}

/// Set the player's default rest length, clamped to 1..=3.
pub fn set_rest_preference(player: &Player, games: u32) -> Player {
    let mut updated = player.clone();
    updated.rest_preference = games.clamp(DEFAULT_REST_PREFERENCE, MAX_REST_PREFERENCE);
    updated
}

/// Sit out one extra game (player-requested skip).
pub fn skip_next_game(player: &Player) -> Player {
    let mut updated = player.clone();
    updated.rest = match updated.rest {
        RestState::Eligible => RestState::CoolingDown(1),
        RestState::CoolingDown(n) => RestState::CoolingDown(n + 1),
        RestState::Left => RestState::Left,
    };
    updated
}

/// Clear any remaining cooldown; the player is ready to play now.
pub fn make_ready(player: &Player) -> Player {
    let mut updated = player.clone();
    if updated.rest != RestState::Left {
        updated.rest = RestState::Eligible;
    }
    updated
}

/// Set a manual queue position override (lower = sooner).
pub fn adjust_queue_position(player: &Player, position: u32) -> Player {
    let mut updated = player.clone();
    updated.queue_position = Some(position);
    updated
}

/// Swap the manual queue overrides of two players.
pub fn swap_queue_positions(a: &Player, b: &Player) -> (Player, Player) {
    let mut new_a = a.clone();
    let mut new_b = b.clone();
    std::mem::swap(&mut new_a.queue_position, &mut new_b.queue_position);
    (new_a, new_b)
}
