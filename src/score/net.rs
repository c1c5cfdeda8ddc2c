use crate::error::{EngineError, Result};
use crate::model::{HoleScore, Tee};

/// Gross strokes minus handicap strokes received on the hole. Not clamped.
#[must_use]
pub fn net_score(gross: u32, allocated: u32) -> i32 {
    i64::from(gross)
        .saturating_sub(i64::from(allocated))
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Net total over the holes a player has recorded on `tee`.
///
/// `allocation` is indexed like `tee.holes`.
///
/// # Errors
/// Returns `InvalidInput` when a score names a hole the tee doesn't have, or the
/// allocation length doesn't match the tee.
pub fn net_total(scores: &[&HoleScore], allocation: &[u32], tee: &Tee) -> Result<i32> {
    if allocation.len() != tee.holes.len() {
        return Err(EngineError::invalid(format!(
            "allocation covers {} holes, tee {} has {}",
            allocation.len(),
            tee.name,
            tee.holes.len()
        )));
    }
    let mut total = 0i32;
    for score in scores {
        let pos = tee.hole_position(score.hole_number).ok_or_else(|| {
            EngineError::invalid(format!(
                "tee {} has no hole {}",
                tee.name, score.hole_number
            ))
        })?;
        total = total.saturating_add(net_score(score.strokes, allocation[pos]));
    }
    Ok(total)
}
