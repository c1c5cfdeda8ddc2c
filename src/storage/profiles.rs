use std::sync::Arc;

use super::{KvStore, StorageError, kv_put_json};
use crate::model::Player;

pub const PLAYER_KEY: &str = "golfbet_players";

/// Saved player profiles, stored as one JSON array under [`PLAYER_KEY`].
#[derive(Clone)]
pub struct PlayerProfiles {
    store: Arc<dyn KvStore>,
}

impl PlayerProfiles {
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// All saved players. A missing or unreadable entry reads as no players.
    ///
    /// # Errors
    /// Returns an error only if the store itself fails.
    pub fn all_players(&self) -> Result<Vec<Player>, StorageError> {
        let Some(bytes) = self.store.get(PLAYER_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice(&bytes) {
            Ok(players) => Ok(players),
            Err(e) => {
                tracing::warn!(error = %e, key = PLAYER_KEY, "discarding unreadable player profiles");
                Ok(Vec::new())
            }
        }
    }

    /// Insert or replace the profile with the same id.
    ///
    /// # Errors
    /// Returns an error if the store can't be read or written.
    pub fn save_player(&self, player: &Player) -> Result<(), StorageError> {
        let mut players = self.all_players()?;
        match players.iter_mut().find(|p| p.id == player.id) {
            Some(existing) => *existing = player.clone(),
            None => players.push(player.clone()),
        }
        kv_put_json(self.store.as_ref(), PLAYER_KEY, &players)
    }

    /// # Errors
    /// Returns an error if the store can't be read.
    pub fn player_by_id(&self, id: &str) -> Result<Option<Player>, StorageError> {
        Ok(self.all_players()?.into_iter().find(|p| p.id == id))
    }
}
