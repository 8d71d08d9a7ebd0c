//! Combination search: pick the best foursome and team split for one court.

use crate::logic::scoring::fairness_score;
use crate::models::{GameRecord, Player, RotationError};

/// The winning arrangement for one court.
#[derive(Clone, Debug, PartialEq)]
pub struct Foursome {
    pub team_1: [Player; 2],
    pub team_2: [Player; 2],
    pub score: u32,
    pub reasons: Vec<String>,
}

/// The 3 ways to split indices 0..4 into two unordered teams of two.
const TEAM_SPLITS: [([usize; 2], [usize; 2]); 3] =
    [([0, 1], [2, 3]), ([0, 2], [1, 3]), ([0, 3], [1, 2])];

/// Exhaustively search all 4-subsets of `pool` and all team splits, returning
/// the highest-scoring arrangement. Ties keep the first arrangement seen in
/// scan order, so the result is deterministic for a fixed pool order.
///
/// Errors with [`RotationError::NotEnoughPlayers`] when `pool.len() < 4`;
/// the orchestrator guards before calling. O(n^4) in the pool size,
/// acceptable for typical session sizes (tens of players).
pub fn find_best_foursome(
    pool: &[Player],
    history: &[GameRecord],
) -> Result<Foursome, RotationError> {
    if pool.len() < 4 {
        return Err(RotationError::NotEnoughPlayers);
    }

    let mut best: Option<Foursome> = None;

    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            for k in (j + 1)..pool.len() {
                for l in (k + 1)..pool.len() {
                    let four = [&pool[i], &pool[j], &pool[k], &pool[l]];
                    for (t1, t2) in TEAM_SPLITS {
                        let team_1 = (four[t1[0]], four[t1[1]]);
                        let team_2 = (four[t2[0]], four[t2[1]]);
                        let (score, reasons) = fairness_score(team_1, team_2, history);
                        let improves = best.as_ref().map_or(true, |b| score > b.score);
                        if improves {
                            best = Some(Foursome {
                                team_1: [team_1.0.clone(), team_1.1.clone()],
                                team_2: [team_2.0.clone(), team_2.1.clone()],
                                score,
                                reasons,
                            });
                        }
                    }
                }
            }
        }
    }

    // pool.len() >= 4 guarantees at least one arrangement was scored.
    best.ok_or(RotationError::NotEnoughPlayers)
}
