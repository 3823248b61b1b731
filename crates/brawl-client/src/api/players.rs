//! Players API.

use crate::client::BrawlClient;
use crate::error::Result;
use crate::tag::tag_segment;
use crate::types::{BattleLogEntry, ItemList, Player};

/// Players API client.
pub struct PlayersApi {
    client: BrawlClient,
}

impl PlayersApi {
    pub(crate) fn new(client: BrawlClient) -> Self {
        Self { client }
    }

    /// Get a player profile by tag (with or without the leading `#`).
    pub async fn get(&self, tag: &str) -> Result<Player> {
        let tag = tag_segment(tag)?;
        self.client.get(&format!("/players/{}", tag)).await
    }

    /// Get a player's recent battles.
    pub async fn battle_log(&self, tag: &str) -> Result<ItemList<BattleLogEntry>> {
        let tag = tag_segment(tag)?;
        self.client.get(&format!("/players/{}/battlelog", tag)).await
    }
}
