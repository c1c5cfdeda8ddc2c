use std::collections::BTreeMap;

use super::allocation::allocate_strokes;
use crate::error::{EngineError, Result};
use crate::model::{HandicapCalculation, NEUTRAL_SLOPE, Player, Tee};

fn check_finite(label: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid(format!("{label} must be finite, got {value}")))
    }
}

/// USGA course handicap:
/// `round(index * slope / 113 + (course_rating - par_total))`.
///
/// Rounds half away from zero, so 24.5 becomes 25 and -0.5 becomes -1.
/// Plus handicappers can come out negative; allocation treats that as zero strokes.
///
/// # Errors
/// Returns `InvalidInput` for a non-finite index or rating, or a slope that is not positive.
pub fn course_handicap(handicap_index: f64, tee: &Tee) -> Result<i32> {
    check_finite("handicap index", handicap_index)?;
    check_finite("course rating", tee.course_rating)?;
    check_finite("slope rating", tee.slope_rating)?;
    if tee.slope_rating <= 0.0 {
        return Err(EngineError::invalid(format!(
            "slope rating must be positive, got {}",
            tee.slope_rating
        )));
    }

    let raw = handicap_index * (tee.slope_rating / NEUTRAL_SLOPE)
        + (tee.course_rating - f64::from(tee.par_total));
    let rounded = raw.round();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(EngineError::invalid(format!(
            "course handicap {raw} is out of range"
        )));
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(rounded as i32)
}

/// Stroke-play allocation for one player on a tee.
///
/// # Errors
/// Returns `InvalidInput` on bad ratings or a tee without holes.
pub fn adjusted_strokes(player: &Player, tee: &Tee) -> Result<Vec<u32>> {
    let ch = course_handicap(player.handicap_index, tee)?;
    allocate_strokes(ch, &tee.holes)
}

/// Course handicap, playing handicap and per-hole strokes for one player.
///
/// `allowance_percent` scales the course handicap into the playing handicap
/// (100 for full handicap); strokes are allocated from the playing handicap.
///
/// # Errors
/// Returns `InvalidInput` on bad ratings, an allowance outside 0..=100, or a tee without holes.
pub fn handicap_calculation(
    player: &Player,
    tee: &Tee,
    allowance_percent: f64,
) -> Result<HandicapCalculation> {
    check_finite("handicap allowance", allowance_percent)?;
    if !(0.0..=100.0).contains(&allowance_percent) {
        return Err(EngineError::invalid(format!(
            "handicap allowance must be within 0..=100, got {allowance_percent}"
        )));
    }

    let course = course_handicap(player.handicap_index, tee)?;
    #[allow(clippy::cast_possible_truncation)]
    let playing = (f64::from(course) * allowance_percent / 100.0).round() as i32;
    let strokes = allocate_strokes(playing, &tee.holes)?;

    let strokes_per_hole: BTreeMap<u32, u32> = strokes
        .into_iter()
        .enumerate()
        .map(|(i, s)| (tee.hole_number_at(i), s))
        .collect();

    tracing::debug!(
        player = %player.id,
        course_handicap = course,
        playing_handicap = playing,
        "computed handicap"
    );
    Ok(HandicapCalculation {
        handicap_index: player.handicap_index,
        course_handicap: course,
        playing_handicap: playing,
        strokes_per_hole,
    })
}
