use crate::error::{EngineError, Result};
use crate::model::Hole;

/// Hole positions ordered hardest first. Equal stroke indices keep input order.
#[must_use]
pub fn holes_by_difficulty(holes: &[Hole]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..holes.len()).collect();
    order.sort_by_key(|&i| holes[i].handicap);
    order
}

/// Deal `course_handicap` strokes one at a time over the holes, hardest first,
/// wrapping around once every hole has one. A negative handicap allocates nothing.
///
/// The result is indexed like `holes` and sums to `max(course_handicap, 0)`.
///
/// # Errors
/// Returns `InvalidInput` if `holes` is empty.
pub fn allocate_strokes(course_handicap: i32, holes: &[Hole]) -> Result<Vec<u32>> {
    if holes.is_empty() {
        return Err(EngineError::invalid(
            "cannot allocate strokes over an empty hole list",
        ));
    }

    let mut strokes = vec![0u32; holes.len()];
    let to_give = u32::try_from(course_handicap.max(0)).unwrap_or(0);
    if to_give == 0 {
        return Ok(strokes);
    }

    let order = holes_by_difficulty(holes);
    let n = u32::try_from(order.len()).unwrap_or(u32::MAX);
    let (full_laps, remainder) = (to_give / n, to_give % n);
    for (pos, &hole_idx) in order.iter().enumerate() {
        strokes[hole_idx] = full_laps + u32::from((pos as u32) < remainder);
    }

    tracing::trace!(course_handicap, holes = holes.len(), "allocated strokes");
    Ok(strokes)
}
