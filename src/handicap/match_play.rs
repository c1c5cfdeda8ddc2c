use super::allocation::allocate_strokes;
use super::course_handicap::course_handicap;
use crate::error::{EngineError, Result};
use crate::model::{Player, Tee};

/// Strokes `player` receives from `opponent` on each hole of `tee`.
///
/// Only the positive course handicap difference is allocated, using the same
/// hardest-first wraparound as stroke play. When `player` is the better (or
/// equal) golfer the result is all zeros, so swapping the arguments does not
/// negate the result.
///
/// # Errors
/// Returns `InvalidInput` on bad ratings or a tee without holes.
pub fn match_play_strokes(player: &Player, opponent: &Player, tee: &Tee) -> Result<Vec<u32>> {
    if tee.holes.is_empty() {
        return Err(EngineError::invalid(format!(
            "tee {} has no holes to allocate over",
            tee.name
        )));
    }
    let player_ch = course_handicap(player.handicap_index, tee)?;
    let opponent_ch = course_handicap(opponent.handicap_index, tee)?;
    let difference = player_ch.saturating_sub(opponent_ch);

    tracing::debug!(
        player = %player.id,
        opponent = %opponent.id,
        difference,
        "match play stroke difference"
    );
    allocate_strokes(difference.max(0), &tee.holes)
}

/// Match play strokes for every player against the lowest course handicap in the field.
///
/// # Errors
/// Returns `InvalidInput` on bad ratings or a tee without holes.
pub fn field_match_play_strokes(players: &[Player], tee: &Tee) -> Result<Vec<(String, Vec<u32>)>> {
    let Some(low) = players
        .iter()
        .map(|p| course_handicap(p.handicap_index, tee).map(|ch| (ch, p)))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .min_by_key(|(ch, _)| *ch)
        .map(|(_, p)| p)
    else {
        return Ok(Vec::new());
    };

    players
        .iter()
        .map(|p| Ok((p.id.clone(), match_play_strokes(p, low, tee)?)))
        .collect()
}
