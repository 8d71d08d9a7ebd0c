//! Rotation orchestrator: fill available courts, queue the rest, report metrics.

use crate::logic::queue::{eligible_in_order, RotationStrategy};
use crate::logic::scoring::{partnership_counts, variance};
use crate::logic::search::find_best_foursome;
use crate::models::{
    Court, FairnessMetrics, GameRecord, GameStatus, GameSuggestion, MatchRecord, PartnershipCount,
    Player, RestState, RotationResult,
};
use std::cmp::Reverse;
use std::collections::HashSet;

/// How many waiting players are reported as "next in line".
const NEXT_IN_LINE_LIMIT: usize = 8;

/// Produce one rotation cycle over an immutable session snapshot.
///
/// Eligible players are ordered per `strategy`, then courts are filled in
/// list order, consuming four players each; a court whose remaining pool is
/// smaller than four is simply left empty. Fewer than four eligible players
/// overall yields no suggestions and the whole queue as `next_in_line`.
///
/// `current_game_number` defaults to `game_history.len() + 1`.
pub fn generate_optimal_rotation(
    players: &[Player],
    game_history: &[GameRecord],
    courts: &[Court],
    match_history: &[MatchRecord],
    current_game_number: Option<u32>,
    strategy: RotationStrategy,
) -> RotationResult {
    let current_game_number =
        current_game_number.unwrap_or_else(|| game_history.len() as u32 + 1);

    let mut pool = eligible_in_order(players, current_game_number, strategy);
    log::debug!(
        "rotation cycle: {} eligible of {} players, {} court(s)",
        pool.len(),
        players.len(),
        courts.iter().filter(|c| c.is_available).count()
    );

    let mut suggestions = Vec::new();
    for court in courts.iter().filter(|c| c.is_available) {
        if pool.len() < 4 {
            break;
        }
        let foursome = match find_best_foursome(&pool, game_history) {
            Ok(f) => f,
            Err(_) => break,
        };
        let assigned: HashSet<_> = foursome
            .team_1
            .iter()
            .chain(foursome.team_2.iter())
            .map(|p| p.id)
            .collect();
        pool.retain(|p| !assigned.contains(&p.id));
        log::debug!(
            "court '{}': fairness {} ({} players left waiting)",
            court.name,
            foursome.score,
            pool.len()
        );
        suggestions.push(GameSuggestion {
            court: court.clone(),
            team_1: foursome.team_1,
            team_2: foursome.team_2,
            fairness_score: foursome.score,
            reasons: foursome.reasons,
        });
    }

    pool.truncate(NEXT_IN_LINE_LIMIT);

    RotationResult {
        suggestions,
        next_in_line: pool,
        metrics: compute_metrics(players, game_history, match_history),
    }
}

/// Aggregate fairness metrics over every player still in the session
/// (anyone not `Left`), regardless of this cycle's eligibility.
fn compute_metrics(
    players: &[Player],
    game_history: &[GameRecord],
    match_history: &[MatchRecord],
) -> FairnessMetrics {
    let counts: Vec<f64> = players
        .iter()
        .filter(|p| p.rest != RestState::Left)
        .map(|p| f64::from(p.games_played))
        .collect();
    let average = if counts.is_empty() {
        0.0
    } else {
        counts.iter().sum::<f64>() / counts.len() as f64
    };

    let mut partnerships: Vec<PartnershipCount> = partnership_counts(game_history)
        .into_iter()
        .map(|((a, b), games_together)| PartnershipCount {
            players: [a, b],
            games_together,
        })
        .collect();
    partnerships.sort_by_key(|p| (Reverse(p.games_together), p.players));

    FairnessMetrics {
        average_games_played: average,
        games_played_variance: variance(&counts),
        partnerships,
        matches_completed: match_history
            .iter()
            .filter(|m| m.status == GameStatus::Completed)
            .count() as u32,
    }
}

/// Render a rotation as a human-readable summary. Pure formatting.
pub fn rotation_explanation(suggestions: &[GameSuggestion], metrics: &FairnessMetrics) -> String {
    let mut lines = vec![format!(
        "Session: {:.1} games/player on average (variance {:.1}), {} completed match(es)",
        metrics.average_games_played, metrics.games_played_variance, metrics.matches_completed
    )];

    if suggestions.is_empty() {
        lines.push("No courts could be filled this cycle.".to_string());
    }
    for s in suggestions {
        lines.push(format!(
            "{}: {} & {} vs {} & {} (fairness {}): {}",
            s.court.name,
            s.team_1[0].name,
            s.team_1[1].name,
            s.team_2[0].name,
            s.team_2[1].name,
            s.fairness_score,
            s.reasons.join("; ")
        ));
    }

    lines.join("\n")
}
