//! Fairness scoring: a 0-100 composite over a proposed foursome.
//!
//! Four weighted sub-scores, each clamped to 0..=100 before weighting:
//! games-played balance (40%), partnership diversity (30%), win/loss balance
//! (20%), recent-play avoidance (10%). Pure; recomputed per arrangement
//! during search since single arrangements are cheap to score.

use crate::models::{GameRecord, Player, PlayerId};
use std::collections::HashMap;

const WEIGHT_GAMES_BALANCE: f64 = 0.4;
const WEIGHT_PARTNERSHIP: f64 = 0.3;
const WEIGHT_WIN_BALANCE: f64 = 0.2;
const WEIGHT_RECENT_PLAY: f64 = 0.1;

/// Penalty per repeat partnership inside the recent window.
const REPEAT_PARTNER_PENALTY: f64 = 15.0;

/// Penalty per appearance in the last [`RECENT_GAME_COUNT`] games.
const RECENT_PLAY_PENALTY: f64 = 10.0;

/// How many trailing completed games count as "recent" for rest purposes.
const RECENT_GAME_COUNT: usize = 3;

/// Population variance. Empty and single-element slices have variance 0.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64
}

/// Unordered pair key: smaller id first.
fn partner_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Count how often each unordered pair partnered across completed games.
pub fn partnership_counts(history: &[GameRecord]) -> HashMap<(PlayerId, PlayerId), u32> {
    let mut counts = HashMap::new();
    for game in history.iter().filter(|g| g.is_completed()) {
        for team in [&game.team_1, &game.team_2] {
            *counts.entry(partner_key(team[0], team[1])).or_insert(0) += 1;
        }
    }
    counts
}

/// The last `window` completed games, oldest first.
fn recent_completed(history: &[GameRecord], window: usize) -> Vec<&GameRecord> {
    let completed: Vec<&GameRecord> = history.iter().filter(|g| g.is_completed()).collect();
    let skip = completed.len().saturating_sub(window);
    completed[skip..].to_vec()
}

/// How many of the last `window` completed games had `a` and `b` as partners.
fn recent_partner_games(a: PlayerId, b: PlayerId, history: &[GameRecord], window: usize) -> u32 {
    let key = partner_key(a, b);
    recent_completed(history, window)
        .iter()
        .flat_map(|g| [&g.team_1, &g.team_2])
        .filter(|team| partner_key(team[0], team[1]) == key)
        .count() as u32
}

fn games_balance(players: &[&Player; 4]) -> (f64, String) {
    let counts: Vec<f64> = players.iter().map(|p| f64::from(p.games_played)).collect();
    let var = variance(&counts);
    let score = f64::max(0.0, 100.0 - var * 20.0);
    let reason = if var < 1.0 {
        "Excellent games-played balance".to_string()
    } else if var < 2.0 {
        "Good games-played balance".to_string()
    } else {
        "Some players need more games".to_string()
    };
    (score, reason)
}

fn partnership_diversity(
    team_1: (&Player, &Player),
    team_2: (&Player, &Player),
    history: &[GameRecord],
) -> (f64, Vec<String>) {
    // Window scales with the candidate count so a larger team format would
    // widen it; for doubles it is max(5, 8) = 8 completed games.
    let window = usize::max(5, 4 * 2);
    let mut score = 100.0;
    let mut reasons = Vec::new();
    for (a, b) in [team_1, team_2] {
        let repeats = recent_partner_games(a.id, b.id, history, window);
        if repeats > 0 {
            score -= REPEAT_PARTNER_PENALTY * f64::from(repeats);
            reasons.push(format!(
                "{} & {} partnered {} of the last {} games",
                a.name, b.name, repeats, window
            ));
        }
    }
    if reasons.is_empty() {
        reasons.push("Fresh partner combinations".to_string());
    }
    (f64::max(0.0, score), reasons)
}

fn win_loss_balance(players: &[&Player; 4]) -> f64 {
    let rates: Vec<f64> = players.iter().map(|p| p.win_rate()).collect();
    f64::max(0.0, 100.0 - variance(&rates) * 100.0)
}

fn recent_play_avoidance(players: &[&Player; 4], history: &[GameRecord]) -> (f64, Option<String>) {
    let recent = recent_completed(history, RECENT_GAME_COUNT);
    let mut appearances = 0u32;
    for p in players {
        appearances += recent
            .iter()
            .filter(|g| g.participants().contains(&p.id))
            .count() as u32;
    }
    let score = f64::max(0.0, 100.0 - RECENT_PLAY_PENALTY * f64::from(appearances));
    let reason = if appearances > 0 {
        Some(format!(
            "{} appearance(s) in the last {} games",
            appearances, RECENT_GAME_COUNT
        ))
    } else {
        None
    };
    (score, reason)
}

/// Score one candidate arrangement (two teams of two) against the history.
///
/// Returns the composite score in 0..=100 plus display reasons. Pure and
/// order-independent for a fixed arrangement.
pub fn fairness_score(
    team_1: (&Player, &Player),
    team_2: (&Player, &Player),
    history: &[GameRecord],
) -> (u32, Vec<String>) {
    let players = [team_1.0, team_1.1, team_2.0, team_2.1];

    let (balance, balance_reason) = games_balance(&players);
    let (diversity, mut diversity_reasons) = partnership_diversity(team_1, team_2, history);
    let win_balance = win_loss_balance(&players);
    let (rest, rest_reason) = recent_play_avoidance(&players, history);

    let total = WEIGHT_GAMES_BALANCE * balance
        + WEIGHT_PARTNERSHIP * diversity
        + WEIGHT_WIN_BALANCE * win_balance
        + WEIGHT_RECENT_PLAY * rest;

    let mut reasons = vec![balance_reason];
    reasons.append(&mut diversity_reasons);
    if let Some(r) = rest_reason {
        reasons.push(r);
    }

    (total.round() as u32, reasons)
}
