use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Slope rating of a tee of standard difficulty.
pub const NEUTRAL_SLOPE: f64 = 113.0;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole_number: Option<u32>,
    pub par: u32,
    #[serde(default)]
    pub yardage: u32,
    /// Stroke index, 1 is the hardest hole.
    pub handicap: u32,
}

impl Hole {
    #[must_use]
    pub fn new(par: u32, yardage: u32, handicap: u32) -> Self {
        Self {
            hole_number: None,
            par,
            yardage,
            handicap,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tee {
    pub name: String,
    pub course_rating: f64,
    pub slope_rating: f64,
    pub par_total: u32,
    #[serde(default)]
    pub holes: Vec<Hole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bogey_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_yards: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_course_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_slope_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_course_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_slope_rating: Option<f64>,
}

impl Tee {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        course_rating: f64,
        slope_rating: f64,
        holes: Vec<Hole>,
    ) -> Self {
        let par_total = holes.iter().map(|h| h.par).sum();
        Self {
            name: name.into(),
            course_rating,
            slope_rating,
            par_total,
            holes,
            bogey_rating: None,
            total_yards: None,
            front_course_rating: None,
            front_slope_rating: None,
            back_course_rating: None,
            back_slope_rating: None,
        }
    }

    /// Printed number of the hole at `position`, or `position + 1` when unnumbered.
    #[must_use]
    pub fn hole_number_at(&self, position: usize) -> u32 {
        self.holes
            .get(position)
            .and_then(|h| h.hole_number)
            .unwrap_or_else(|| u32::try_from(position + 1).unwrap_or(u32::MAX))
    }

    /// Hole by 1-based number. Falls back to position when holes carry no number.
    #[must_use]
    pub fn hole(&self, hole_number: u32) -> Option<&Hole> {
        self.hole_position(hole_number).map(|i| &self.holes[i])
    }

    #[must_use]
    pub fn hole_position(&self, hole_number: u32) -> Option<usize> {
        self.holes
            .iter()
            .position(|h| h.hole_number == Some(hole_number))
            .or_else(|| {
                let idx = usize::try_from(hole_number).ok()?.checked_sub(1)?;
                self.holes
                    .get(idx)
                    .filter(|h| h.hole_number.is_none())
                    .map(|_| idx)
            })
    }

    /// Checks that stroke indices form a permutation of `1..=holes.len()`.
    ///
    /// # Errors
    /// Returns `InvalidInput` naming the first duplicate or out-of-range index.
    pub fn validate_stroke_indices(&self) -> Result<()> {
        let n = self.holes.len();
        let mut seen = vec![false; n];
        for (pos, hole) in self.holes.iter().enumerate() {
            let idx = hole.handicap as usize;
            if idx == 0 || idx > n {
                return Err(EngineError::invalid(format!(
                    "tee {}: hole {} has stroke index {} outside 1..={n}",
                    self.name,
                    pos + 1,
                    hole.handicap
                )));
            }
            if seen[idx - 1] {
                return Err(EngineError::invalid(format!(
                    "tee {}: stroke index {} appears more than once",
                    self.name, hole.handicap
                )));
            }
            seen[idx - 1] = true;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default)]
    pub tees: Vec<Tee>,
}

impl Course {
    #[must_use]
    pub fn tee(&self, name: &str) -> Option<&Tee> {
        self.tees.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
