use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HoleScore {
    pub player_id: String,
    pub hole_number: u32,
    pub strokes: u32,
}

impl HoleScore {
    #[must_use]
    pub fn new(player_id: impl Into<String>, hole_number: u32, strokes: u32) -> Self {
        Self {
            player_id: player_id.into(),
            hole_number,
            strokes,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub player_name: String,
    pub total: u32,
    pub thru_hole: u32,
    /// 1-based position in the sorted standing. Ties are not shared.
    pub rank: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_total: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_par: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HandicapCalculation {
    pub handicap_index: f64,
    pub course_handicap: i32,
    pub playing_handicap: i32,
    /// Hole number to strokes received on that hole.
    pub strokes_per_hole: BTreeMap<u32, u32>,
}
