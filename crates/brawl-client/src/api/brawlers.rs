//! Brawlers API.

use crate::client::BrawlClient;
use crate::error::Result;
use crate::query::PageQuery;
use crate::types::{Brawler, ItemList};

/// Brawlers API client.
pub struct BrawlersApi {
    client: BrawlClient,
}

impl BrawlersApi {
    pub(crate) fn new(client: BrawlClient) -> Self {
        Self { client }
    }

    /// List all brawlers.
    pub async fn list(&self, page: PageQuery) -> Result<ItemList<Brawler>> {
        self.client.fetch_resource("/brawlers", &page.into()).await
    }

    /// Get a brawler by ID.
    pub async fn get(&self, id: u64) -> Result<Brawler> {
        self.client.get(&format!("/brawlers/{}", id)).await
    }
}
