use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// USGA handicap index. Negative for plus handicappers.
    #[serde(default)]
    pub handicap_index: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_games_played: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_winnings: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_game: Option<String>,
}

impl Player {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, handicap_index: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            handicap_index,
            email: None,
            avatar: None,
            total_games_played: None,
            total_winnings: None,
            favorite_game: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
    /// Share of the combined handicap index that applies, 0..=100. Absent means 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_of_handicap: Option<f64>,
}

impl Team {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            players,
            percent_of_handicap: None,
        }
    }

    #[must_use]
    pub fn with_percent(mut self, percent: f64) -> Self {
        self.percent_of_handicap = Some(percent);
        self
    }
}
