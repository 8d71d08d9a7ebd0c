//! Queue priority: ordering of waiting players.

use crate::models::{Player, PlayerStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Cap on the idle-time bonus.
const MAX_IDLE_BONUS: i64 = 25;

/// How waiting players are ordered.
///
/// `Priority` is the canonical multi-factor queue; `Basic` is the legacy
/// reduced configuration (plain games-played sort) kept behind the same
/// entry point.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationStrategy {
    #[default]
    Priority,
    Basic,
}

/// Signed queue priority; higher sorts earlier.
///
/// Base is the games-played deficit against the session maximum (x10), plus
/// a capped idle bonus. Rest gating pushes a cooling-down player far
/// negative (-100 for a pending countdown, -200 more while resting), and the
/// manual override is applied after gating so it can never lift a resting
/// player back past the `>= 0` candidate cut-off: its contribution is capped
/// at +200.
pub fn queue_priority(player: &Player, current_game_number: u32, all_players: &[Player]) -> i64 {
    let max_games = all_players
        .iter()
        .map(|p| p.games_played)
        .max()
        .unwrap_or(0);

    let mut priority = i64::from(max_games.saturating_sub(player.games_played)) * 10;

    let idle_games = i64::from(current_game_number.saturating_sub(player.last_game_number));
    priority += i64::min(idle_games * 5, MAX_IDLE_BONUS);

    if player.rest_games_remaining() > 0 {
        priority -= 100;
    }
    if player.status() == PlayerStatus::Resting {
        priority -= 200;
    }

    if let Some(pos) = player.queue_position {
        priority += (100 - i64::from(pos)) * 2;
    }

    priority
}

/// Filter the roster to rotation candidates and order them for assignment.
///
/// Candidates must be rest-eligible; under `Priority` they must also carry a
/// non-negative priority value. Ties break on `joined_at` ascending, giving
/// a deterministic total order for a fixed input order.
pub fn eligible_in_order(
    players: &[Player],
    current_game_number: u32,
    strategy: RotationStrategy,
) -> Vec<Player> {
    match strategy {
        RotationStrategy::Priority => {
            let mut ranked: Vec<(i64, Player)> = players
                .iter()
                .filter(|p| p.is_eligible())
                .map(|p| (queue_priority(p, current_game_number, players), p.clone()))
                .filter(|(priority, _)| *priority >= 0)
                .collect();
            ranked.sort_by_key(|(priority, p)| (Reverse(*priority), p.joined_at));
            ranked.into_iter().map(|(_, p)| p).collect()
        }
        RotationStrategy::Basic => {
            let mut pool: Vec<Player> = players.iter().filter(|p| p.is_eligible()).cloned().collect();
            pool.sort_by_key(|p| (p.games_played, p.joined_at));
            pool
        }
    }
}
