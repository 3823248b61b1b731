//! Clubs API.

use crate::client::BrawlClient;
use crate::error::Result;
use crate::query::PageQuery;
use crate::tag::tag_segment;
use crate::types::{Club, ClubMember, ItemList};

/// Clubs API client.
pub struct ClubsApi {
    client: BrawlClient,
}

impl ClubsApi {
    pub(crate) fn new(client: BrawlClient) -> Self {
        Self { client }
    }

    /// Get a club by tag.
    pub async fn get(&self, tag: &str) -> Result<Club> {
        let tag = tag_segment(tag)?;
        self.client.get(&format!("/clubs/{}", tag)).await
    }

    /// List a club's members.
    pub async fn members(&self, tag: &str, page: PageQuery) -> Result<ItemList<ClubMember>> {
        let tag = tag_segment(tag)?;
        self.client
            .fetch_resource(&format!("/clubs/{}/members", tag), &page.into())
            .await
    }
}
