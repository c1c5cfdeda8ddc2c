use crate::error::{EngineError, Result};
use crate::model::Team;

pub const DEFAULT_PERCENT_OF_HANDICAP: f64 = 100.0;

/// Combined handicap index of a team, scaled by its `percent_of_handicap`.
///
/// An empty team has a handicap of zero.
///
/// # Errors
/// Returns `InvalidInput` for a non-finite member index or a percent outside 0..=100.
pub fn team_handicap(team: &Team) -> Result<f64> {
    let percent = team
        .percent_of_handicap
        .unwrap_or(DEFAULT_PERCENT_OF_HANDICAP);
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(EngineError::invalid(format!(
            "team {}: percent of handicap must be within 0..=100, got {percent}",
            team.id
        )));
    }

    let mut total = 0.0;
    for player in &team.players {
        if !player.handicap_index.is_finite() {
            return Err(EngineError::invalid(format!(
                "team {}: player {} has a non-finite handicap index",
                team.id, player.id
            )));
        }
        total += player.handicap_index;
    }
    Ok(total * (percent / 100.0))
}
