use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{EngineError, Result};
use crate::handicap::course_handicap;
use crate::model::{GolfGame, HoleScore, LeaderboardEntry, Player, Tee};
use crate::score::{DEFAULT_PAR, initialize_hole_scores, leaderboard, net_leaderboard};

pub const MIN_STROKES: u32 = 1;
pub const MAX_STROKES: u32 = 15;

/// Caller-side state of a round in progress. Scores are append-only.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    pub tee: Tee,
    pub players: Vec<Player>,
    #[serde(default = "first_hole")]
    pub current_hole: u32,
    #[serde(default)]
    pub scores: Vec<HoleScore>,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

fn first_hole() -> u32 {
    1
}

fn check_strokes(count: u32, who: &str, hole: u32) -> Result<()> {
    if (MIN_STROKES..=MAX_STROKES).contains(&count) {
        Ok(())
    } else {
        Err(EngineError::invalid(format!(
            "{count} strokes for {who} on hole {hole} is outside {MIN_STROKES}..={MAX_STROKES}"
        )))
    }
}

impl Round {
    /// Start a round of `game` on `tee`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the tee has no holes or broken stroke indices,
    /// a player is unnamed or repeated, or the game doesn't allow this many players.
    pub fn new(game: &GolfGame, tee: Tee, players: Vec<Player>) -> Result<Self> {
        let round = Self {
            game_id: game.id.clone(),
            course_name: None,
            tee,
            players,
            current_hole: first_hole(),
            scores: Vec::new(),
            is_complete: false,
            start_time: Some(Utc::now()),
            end_time: None,
        };
        round.validate()?;
        if !game.supports_player_count(round.players.len()) {
            return Err(EngineError::invalid(format!(
                "{} needs {}..={} players, got {}",
                game.name,
                game.min_players,
                game.max_players,
                round.players.len()
            )));
        }
        tracing::info!(game = %game.id, players = round.players.len(), tee = %round.tee.name, "round started");
        Ok(round)
    }

    #[must_use]
    pub fn with_course_name(mut self, name: impl Into<String>) -> Self {
        self.course_name = Some(name.into());
        self
    }

    /// Checks a round loaded from outside, e.g. a JSON file.
    ///
    /// # Errors
    /// Returns `InvalidInput` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.tee.holes.is_empty() {
            return Err(EngineError::invalid(format!(
                "tee {} has no holes",
                self.tee.name
            )));
        }
        self.tee.validate_stroke_indices()?;

        let mut ids = HashSet::new();
        for player in &self.players {
            if player.name.trim().is_empty() {
                return Err(EngineError::invalid(format!(
                    "player {} has no name",
                    player.id
                )));
            }
            if !ids.insert(player.id.as_str()) {
                return Err(EngineError::invalid(format!(
                    "player id {} appears more than once",
                    player.id
                )));
            }
        }

        // a finished round may sit one past the last hole
        let last = self.hole_count();
        let max_hole = if self.is_complete { last + 1 } else { last };
        if self.current_hole == 0 || self.current_hole > max_hole {
            return Err(EngineError::invalid(format!(
                "current hole {} is outside 1..={max_hole}",
                self.current_hole
            )));
        }
        let mut recorded = HashSet::new();
        for score in &self.scores {
            if !ids.contains(score.player_id.as_str()) {
                return Err(EngineError::invalid(format!(
                    "score for unknown player {}",
                    score.player_id
                )));
            }
            if self.tee.hole(score.hole_number).is_none() {
                return Err(EngineError::invalid(format!(
                    "score for hole {} which tee {} doesn't have",
                    score.hole_number, self.tee.name
                )));
            }
            check_strokes(score.strokes, &score.player_id, score.hole_number)?;
            if !recorded.insert((score.player_id.as_str(), score.hole_number)) {
                return Err(EngineError::invalid(format!(
                    "hole {} recorded more than once for {}",
                    score.hole_number, score.player_id
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn hole_count(&self) -> u32 {
        u32::try_from(self.tee.holes.len()).unwrap_or(u32::MAX)
    }

    /// Entry defaults for the current hole: its par, or 4 if the tee doesn't say.
    #[must_use]
    pub fn hole_defaults(&self) -> HashMap<String, u32> {
        let par = self
            .tee
            .hole(self.current_hole)
            .map_or(DEFAULT_PAR, |h| h.par);
        initialize_hole_scores(&self.players, par)
    }

    /// Record every player's strokes for the current hole, then move on.
    /// The round completes after the last hole.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the round is over, a player is missing or
    /// unknown, strokes fall outside 1..=15, the current hole isn't on the tee,
    /// or the hole was already recorded.
    pub fn submit_hole(&mut self, strokes: &HashMap<String, u32>) -> Result<()> {
        if self.is_complete {
            return Err(EngineError::invalid("round is already complete"));
        }
        if let Some(unknown) = strokes
            .keys()
            .find(|id| !self.players.iter().any(|p| &p.id == *id))
        {
            return Err(EngineError::invalid(format!("unknown player {unknown}")));
        }

        let hole = self.current_hole;
        if self.tee.hole(hole).is_none() {
            return Err(EngineError::invalid(format!(
                "tee {} has no hole {hole}",
                self.tee.name
            )));
        }
        let mut new_scores = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let Some(&count) = strokes.get(&player.id) else {
                return Err(EngineError::invalid(format!(
                    "no score for {} on hole {hole}",
                    player.name
                )));
            };
            check_strokes(count, &player.name, hole)?;
            if self
                .scores
                .iter()
                .any(|s| s.player_id == player.id && s.hole_number == hole)
            {
                return Err(EngineError::invalid(format!(
                    "hole {hole} already recorded for {}",
                    player.name
                )));
            }
            new_scores.push(HoleScore::new(player.id.clone(), hole, count));
        }

        self.scores.extend(new_scores);
        if hole < self.hole_count() {
            self.current_hole += 1;
            tracing::debug!(hole, next = self.current_hole, "hole complete");
        } else {
            self.is_complete = true;
            self.end_time = Some(Utc::now());
            tracing::info!(game = %self.game_id, "round complete");
        }
        Ok(())
    }

    /// Holes finished so far, for leaderboard `thru_hole`.
    #[must_use]
    pub fn leaderboard_hole(&self) -> u32 {
        if self.is_complete {
            self.hole_count() + 1
        } else {
            self.current_hole
        }
    }

    /// # Errors
    /// Returns `NotFound` if no player in the round has this id.
    pub fn player(&self, id: &str) -> Result<&Player> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EngineError::NotFound(format!("no player {id} in round")))
    }

    /// Course handicap of each player, in player order.
    ///
    /// # Errors
    /// Returns `InvalidInput` on non-finite ratings or indices.
    pub fn course_handicaps(&self) -> Result<Vec<(String, i32)>> {
        self.players
            .iter()
            .map(|p| Ok((p.id.clone(), course_handicap(p.handicap_index, &self.tee)?)))
            .collect()
    }

    #[must_use]
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard(&self.players, &self.scores, self.leaderboard_hole())
    }

    /// # Errors
    /// Returns `InvalidInput` on bad tee data.
    pub fn net_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        net_leaderboard(&self.players, &self.tee, &self.scores, self.leaderboard_hole())
    }
}
