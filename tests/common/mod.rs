#![allow(dead_code)]

use rusty_golf_handicap::course_lookup::bundled_courses;
use rusty_golf_handicap::model::{Hole, HoleScore, Player, Tee};

/// 18 holes with the given stroke indices, par 4 throughout.
pub fn tee_with_indices(indices: &[u32]) -> Tee {
    let holes = indices.iter().map(|&si| Hole::new(4, 400, si)).collect();
    Tee::new("Test", 72.0, 113.0, holes)
}

/// 18 holes where hole n has stroke index n.
pub fn simple_tee() -> Tee {
    let indices: Vec<u32> = (1..=18).collect();
    tee_with_indices(&indices)
}

/// A realistic permutation of stroke indices.
pub const PEBBLE_INDICES: [u32; 18] = [11, 15, 9, 13, 17, 5, 18, 3, 1, 6, 12, 16, 8, 2, 10, 14, 4, 7];

/// Pebble Beach regular tees: rating 73.2, slope 140, par 72.
pub fn pebble_regular() -> Tee {
    let courses = bundled_courses().expect("bundled courses parse");
    let course = courses
        .into_iter()
        .find(|c| c.id == "pebble-beach")
        .expect("pebble beach bundled");
    course.tee("Regular").expect("regular tee").clone()
}

pub fn player(id: &str, index: f64) -> Player {
    Player::new(id, format!("Player {id}"), index)
}

pub fn scores(player_id: &str, strokes: &[u32]) -> Vec<HoleScore> {
    strokes
        .iter()
        .enumerate()
        .map(|(i, &s)| HoleScore::new(player_id, i as u32 + 1, s))
        .collect()
}
