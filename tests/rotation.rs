//! Integration tests for the rotation orchestrator: court filling, queueing,
//! metrics, and the explanation rendering.

use chrono::{TimeZone, Utc};
use court_rotation::{
    advance, generate_optimal_rotation, rotation_explanation, Court, GameRecord, GameStatus,
    MatchRecord, Player, RestState, RotationResult, RotationStrategy, Team,
};
use std::collections::HashSet;
use uuid::Uuid;

fn roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| {
            let mut p = Player::new(format!("P{i}"));
            p.joined_at = Utc.timestamp_opt(1_700_000_000 + i as i64, 0).unwrap();
            p
        })
        .collect()
}

fn courts(n: usize) -> Vec<Court> {
    (1..=n).map(|i| Court::new(format!("Court {i}"))).collect()
}

fn rotate(players: &[Player], history: &[GameRecord], courts: &[Court]) -> RotationResult {
    let _ = env_logger::builder().is_test(true).try_init();
    generate_optimal_rotation(players, history, courts, &[], None, RotationStrategy::Priority)
}

#[test]
fn four_fresh_players_fill_one_court_perfectly() {
    let players = roster(4);
    let result = rotate(&players, &[], &courts(1));
    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.suggestions[0].fairness_score, 100);
    assert!(result.next_in_line.is_empty());
}

#[test]
fn five_players_leave_exactly_one_waiting() {
    let players = roster(5);
    let result = rotate(&players, &[], &courts(1));
    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.next_in_line.len(), 1);
}

#[test]
fn players_are_never_assigned_to_two_courts() {
    let mut players = roster(9);
    for (i, p) in players.iter_mut().enumerate() {
        p.games_played = (i as u32) % 4;
    }
    let result = rotate(&players, &[], &courts(2));
    assert_eq!(result.suggestions.len(), 2);

    let mut seen = HashSet::new();
    for s in &result.suggestions {
        for p in s.players() {
            assert!(seen.insert(p.id), "player {} assigned twice", p.name);
        }
    }
    // The waiting player is not on a court either.
    assert_eq!(result.next_in_line.len(), 1);
    assert!(!seen.contains(&result.next_in_line[0].id));
}

#[test]
fn too_few_eligible_players_yields_no_suggestions() {
    let players = roster(3);
    let result = rotate(&players, &[], &courts(2));
    assert!(result.suggestions.is_empty());
    assert_eq!(result.next_in_line.len(), 3);
}

#[test]
fn unavailable_courts_are_skipped() {
    let players = roster(8);
    let mut cs = courts(2);
    cs[0].is_available = false;
    let result = rotate(&players, &[], &cs);
    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.suggestions[0].court.name, "Court 2");
}

#[test]
fn courts_beyond_the_pool_stay_empty() {
    let players = roster(6); // enough for one court, not two
    let result = rotate(&players, &[], &courts(3));
    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.next_in_line.len(), 2);
}

#[test]
fn cooling_down_players_appear_nowhere() {
    let mut players = roster(6);
    players[0].rest = RestState::CoolingDown(2);
    let result = rotate(&players, &[], &courts(1));

    let resting_id = players[0].id;
    for s in &result.suggestions {
        assert!(s.players().iter().all(|p| p.id != resting_id));
    }
    assert!(result.next_in_line.iter().all(|p| p.id != resting_id));

    // Two sit-out rounds later the countdown hits zero and they are back.
    let rested = advance(&advance(&players[0], 1, false), 2, false);
    assert_eq!(rested.rest, RestState::Eligible);
    players[0] = rested;
    let result = rotate(&players, &[], &courts(1));
    let everywhere: Vec<_> = result
        .suggestions
        .iter()
        .flat_map(|s| s.players().into_iter().map(|p| p.id))
        .chain(result.next_in_line.iter().map(|p| p.id))
        .collect();
    assert!(everywhere.contains(&resting_id));
}

#[test]
fn next_in_line_is_truncated_to_eight() {
    let players = roster(16);
    let result = rotate(&players, &[], &courts(1));
    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.next_in_line.len(), 8); // 12 waiting, reported 8
}

#[test]
fn rotation_is_deterministic() {
    let mut players = roster(10);
    for (i, p) in players.iter_mut().enumerate() {
        p.games_played = (i as u32) % 3;
        p.wins = (i as u32) % 2;
        p.last_game_number = i as u32 / 2;
    }
    let mut history = vec![GameRecord::new(
        1,
        [players[0].id, players[1].id],
        [players[2].id, players[3].id],
    )];
    history[0].status = GameStatus::Completed;
    history[0].winner = Some(Team::One);

    let first = rotate(&players, &history, &courts(2));
    let second = rotate(&players, &history, &courts(2));
    assert_eq!(first, second);
}

#[test]
fn metrics_cover_the_whole_roster() {
    let mut players = roster(5);
    players[0].games_played = 2;
    players[1].games_played = 2;
    players[4].rest = RestState::Left; // excluded from averages
    let mut g = GameRecord::new(
        1,
        [players[0].id, players[1].id],
        [players[2].id, players[3].id],
    );
    g.status = GameStatus::Completed;
    g.winner = Some(Team::Two);

    let matches = vec![
        MatchRecord {
            id: Uuid::new_v4(),
            game_ids: vec![g.id],
            best_of: 3,
            winner: Some(Team::Two),
            status: GameStatus::Completed,
        },
        MatchRecord {
            id: Uuid::new_v4(),
            game_ids: vec![],
            best_of: 3,
            winner: None,
            status: GameStatus::InProgress,
        },
    ];

    let _ = env_logger::builder().is_test(true).try_init();
    let result = generate_optimal_rotation(
        &players,
        &[g],
        &courts(0),
        &matches,
        None,
        RotationStrategy::Priority,
    );
    assert_eq!(result.metrics.average_games_played, 1.0); // (2+2+0+0)/4
    assert_eq!(result.metrics.partnerships.len(), 2);
    assert_eq!(result.metrics.partnerships[0].games_together, 1);
    assert_eq!(result.metrics.matches_completed, 1);
}

#[test]
fn explanation_names_courts_and_pairings() {
    let players = roster(4);
    let result = rotate(&players, &[], &courts(1));
    let text = rotation_explanation(&result.suggestions, &result.metrics);
    assert!(text.contains("Court 1"));
    assert!(text.contains("fairness 100"));
    assert!(text.contains("games/player"));

    let empty = rotate(&roster(2), &[], &courts(1));
    let text = rotation_explanation(&empty.suggestions, &empty.metrics);
    assert!(text.contains("No courts could be filled"));
}
