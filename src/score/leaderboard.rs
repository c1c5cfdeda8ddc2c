use ahash::RandomState;
use std::collections::HashMap;

use super::net::net_total;
use crate::error::Result;
use crate::handicap::adjusted_strokes;
use crate::model::{HoleScore, LeaderboardEntry, Player, Tee};

pub const DEFAULT_PAR: u32 = 4;

#[must_use]
pub fn player_total(player_id: &str, scores: &[HoleScore]) -> u32 {
    scores
        .iter()
        .filter(|s| s.player_id == player_id)
        .map(|s| s.strokes)
        .sum()
}

fn totals_by_player(scores: &[HoleScore]) -> HashMap<&str, u32, RandomState> {
    let mut totals: HashMap<&str, u32, RandomState> = HashMap::default();
    for score in scores {
        *totals.entry(score.player_id.as_str()).or_insert(0) += score.strokes;
    }
    totals
}

fn assign_ranks(entries: &mut [LeaderboardEntry]) {
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
}

/// Gross standings, lowest total first.
///
/// Every recorded hole counts toward a player's total. `thru_hole` is
/// `current_hole - 1` for everyone. Equal totals keep their input order and
/// still get distinct ranks.
#[must_use]
pub fn leaderboard(
    players: &[Player],
    scores: &[HoleScore],
    current_hole: u32,
) -> Vec<LeaderboardEntry> {
    let mut entries = unranked_entries(players, scores, current_hole);

    // stable: ties stay in input order
    entries.sort_by_key(|e| e.total);
    assign_ranks(&mut entries);
    entries
}

fn unranked_entries(
    players: &[Player],
    scores: &[HoleScore],
    current_hole: u32,
) -> Vec<LeaderboardEntry> {
    let totals = totals_by_player(scores);
    let thru_hole = current_hole.saturating_sub(1);

    players
        .iter()
        .map(|p| LeaderboardEntry {
            player_id: p.id.clone(),
            player_name: p.name.clone(),
            total: totals.get(p.id.as_str()).copied().unwrap_or(0),
            thru_hole,
            rank: 0,
            net_total: None,
            to_par: None,
        })
        .collect()
}

/// Net standings on `tee`, lowest net total first.
///
/// Each player's strokes are allocated from their course handicap and
/// subtracted on the holes they have recorded. `to_par` is the net total
/// against the par of those holes.
///
/// # Errors
/// Returns `InvalidInput` on bad tee data or a score for a hole the tee doesn't have.
pub fn net_leaderboard(
    players: &[Player],
    tee: &Tee,
    scores: &[HoleScore],
    current_hole: u32,
) -> Result<Vec<LeaderboardEntry>> {
    let mut entries = unranked_entries(players, scores, current_hole);

    for (entry, player) in entries.iter_mut().zip(players) {
        let allocation = adjusted_strokes(player, tee)?;
        let own: Vec<&HoleScore> = scores
            .iter()
            .filter(|s| s.player_id == player.id)
            .collect();
        let net = net_total(&own, &allocation, tee)?;
        let par_played: u32 = own
            .iter()
            .filter_map(|s| tee.hole(s.hole_number))
            .map(|h| h.par)
            .sum();
        entry.net_total = Some(net);
        entry.to_par = Some(net - i32::try_from(par_played).unwrap_or(i32::MAX));
    }

    entries.sort_by_key(|e| e.net_total.unwrap_or(i32::MAX));
    assign_ranks(&mut entries);
    Ok(entries)
}

/// Per-player entry defaults for a new hole, keyed by player id.
#[must_use]
pub fn initialize_hole_scores(players: &[Player], default_par: u32) -> HashMap<String, u32> {
    players
        .iter()
        .map(|p| (p.id.clone(), default_par))
        .collect()
}
