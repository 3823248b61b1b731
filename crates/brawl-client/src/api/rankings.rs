//! Rankings API.
//!
//! `country` is a two-letter country code or `global`, passed through as is.

use crate::client::BrawlClient;
use crate::error::Result;
use crate::query::PageQuery;
use crate::types::{ClubRanking, ItemList, PlayerRanking};

/// Rankings API client.
pub struct RankingsApi {
    client: BrawlClient,
}

impl RankingsApi {
    pub(crate) fn new(client: BrawlClient) -> Self {
        Self { client }
    }

    /// Player trophy leaderboard.
    pub async fn players(&self, country: &str, page: PageQuery) -> Result<ItemList<PlayerRanking>> {
        self.client
            .fetch_resource(&format!("/rankings/{}/players", country), &page.into())
            .await
    }

    /// Club trophy leaderboard.
    pub async fn clubs(&self, country: &str, page: PageQuery) -> Result<ItemList<ClubRanking>> {
        self.client
            .fetch_resource(&format!("/rankings/{}/clubs", country), &page.into())
            .await
    }

    /// Leaderboard for a single brawler.
    pub async fn brawlers(
        &self,
        country: &str,
        brawler_id: u64,
        page: PageQuery,
    ) -> Result<ItemList<PlayerRanking>> {
        self.client
            .fetch_resource(
                &format!("/rankings/{}/brawlers/{}", country, brawler_id),
                &page.into(),
            )
            .await
    }
}
