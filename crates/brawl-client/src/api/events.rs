//! Events API.

use crate::client::BrawlClient;
use crate::error::Result;
use crate::types::ScheduledEvent;

/// Events API client.
pub struct EventsApi {
    client: BrawlClient,
}

impl EventsApi {
    pub(crate) fn new(client: BrawlClient) -> Self {
        Self { client }
    }

    /// Current event rotation.
    pub async fn rotation(&self) -> Result<Vec<ScheduledEvent>> {
        self.client.get("/events/rotation").await
    }
}
