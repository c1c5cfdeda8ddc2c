use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{EngineError, Result};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoringFormat {
    StrokePlay,
    MatchPlay,
    PointsBased,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameplayFormat {
    Individual,
    BestBall,
    Scramble,
    Shamble,
    AlternateShot,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchupFormat {
    Solo,
    H2H,
    H2HModified,
    TeamPlay,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl ScoringFormat {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::StrokePlay => "Counts the total number of strokes over 18 holes.",
            Self::MatchPlay => "Holes are won/lost/tied based on individual hole performance.",
            Self::PointsBased => "Players earn points based on hole performance.",
        }
    }
}

impl GameplayFormat {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Individual => "Each player plays their own ball throughout the round.",
            Self::BestBall => {
                "Each player plays their own ball, only the best score on each hole counts for the team."
            }
            Self::Scramble => {
                "All players tee off, the best shot is selected, and all play from that spot."
            }
            Self::Shamble => {
                "All tee off, the best drive is chosen, then everyone plays their own ball in."
            }
            Self::AlternateShot => "Partners alternate hitting the same ball.",
        }
    }

    /// Matchup formats this gameplay format can be played under.
    #[must_use]
    pub fn allowed_matchups(self) -> &'static [MatchupFormat] {
        match self {
            Self::Individual => &[
                MatchupFormat::Solo,
                MatchupFormat::H2H,
                MatchupFormat::H2HModified,
                MatchupFormat::TeamPlay,
            ],
            Self::BestBall | Self::Scramble | Self::Shamble | Self::AlternateShot => {
                &[MatchupFormat::TeamPlay]
            }
        }
    }
}

/// Scoring/matchup pairs rejected regardless of gameplay format.
const INVALID_SCORING_MATCHUPS: &[(ScoringFormat, MatchupFormat)] =
    &[(ScoringFormat::MatchPlay, MatchupFormat::Solo)];

#[must_use]
pub fn is_valid_combination(
    scoring: ScoringFormat,
    gameplay: GameplayFormat,
    matchup: MatchupFormat,
) -> bool {
    gameplay.allowed_matchups().contains(&matchup)
        && !INVALID_SCORING_MATCHUPS
            .iter()
            .any(|&(s, m)| s == scoring && m == matchup)
}

impl fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::StrokePlay => "Stroke Play",
            Self::MatchPlay => "Match Play",
            Self::PointsBased => "Points",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GolfGame {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub min_players: u32,
    pub max_players: u32,
    pub scoring_formats: Vec<ScoringFormat>,
    pub gameplay_formats: Vec<GameplayFormat>,
    pub matchup_formats: Vec<MatchupFormat>,
    #[serde(default)]
    pub betting_enabled: bool,
    #[serde(default)]
    pub handicap_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GolfGame {
    /// Every valid (scoring, gameplay, matchup) triple the game lists.
    #[must_use]
    pub fn combinations(&self) -> Vec<(ScoringFormat, GameplayFormat, MatchupFormat)> {
        let mut out = Vec::new();
        for &s in &self.scoring_formats {
            for &g in &self.gameplay_formats {
                for &m in &self.matchup_formats {
                    if is_valid_combination(s, g, m) {
                        out.push((s, g, m));
                    }
                }
            }
        }
        out
    }

    #[must_use]
    pub fn supports_player_count(&self, count: usize) -> bool {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        (self.min_players..=self.max_players).contains(&count)
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::invalid(format!(
                "game '{}' has an empty id",
                self.name
            )));
        }
        if self.min_players == 0 || self.min_players > self.max_players {
            return Err(EngineError::invalid(format!(
                "game {}: player range {}..={} is invalid",
                self.id, self.min_players, self.max_players
            )));
        }
        let combos = self.combinations();
        if combos.is_empty() {
            return Err(EngineError::invalid(format!(
                "game {} has no valid format combination",
                self.id
            )));
        }
        // every listed format must take part in at least one valid combination
        if let Some(g) = self
            .gameplay_formats
            .iter()
            .find(|g| !combos.iter().any(|c| c.1 == **g))
        {
            return Err(EngineError::invalid(format!(
                "game {}: gameplay format {g:?} has no compatible matchup",
                self.id
            )));
        }
        if let Some(m) = self
            .matchup_formats
            .iter()
            .find(|m| !combos.iter().any(|c| c.2 == **m))
        {
            return Err(EngineError::invalid(format!(
                "game {}: matchup format {m:?} has no compatible gameplay",
                self.id
            )));
        }
        if let Some(s) = self
            .scoring_formats
            .iter()
            .find(|s| !combos.iter().any(|c| c.0 == **s))
        {
            return Err(EngineError::invalid(format!(
                "game {}: scoring format {s:?} has no compatible matchup",
                self.id
            )));
        }
        Ok(())
    }
}

const BUNDLED_GAMES: &str = include_str!("../../data/games.json");

#[derive(Debug, Clone)]
pub struct GameCatalog {
    games: Vec<GolfGame>,
}

impl GameCatalog {
    /// Parse and validate a catalog.
    ///
    /// # Errors
    /// Returns `Parse` for malformed JSON and `InvalidInput` for a game whose
    /// formats are incompatible, whose player range is empty, or whose id repeats.
    pub fn from_json(json: &str) -> Result<Self> {
        let games: Vec<GolfGame> = serde_json::from_str(json)?;
        Self::new(games)
    }

    /// # Errors
    /// See [`GameCatalog::from_json`].
    pub fn new(games: Vec<GolfGame>) -> Result<Self> {
        let mut ids = HashSet::new();
        for game in &games {
            game.validate()?;
            if !ids.insert(game.id.as_str()) {
                return Err(EngineError::invalid(format!(
                    "duplicate game id {}",
                    game.id
                )));
            }
        }
        tracing::debug!(count = games.len(), "loaded game catalog");
        Ok(Self { games })
    }

    /// The catalog shipped with the crate.
    ///
    /// # Errors
    /// Only fails if the bundled data is broken.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_GAMES)
    }

    #[must_use]
    pub fn games(&self) -> &[GolfGame] {
        &self.games
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GolfGame> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Games playable by `count` players.
    #[must_use]
    pub fn for_player_count(&self, count: usize) -> Vec<&GolfGame> {
        self.games
            .iter()
            .filter(|g| g.supports_player_count(count))
            .collect()
    }
}
