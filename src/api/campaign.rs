use reqwest::Method;
use serde_json::{json, Value};

use super::QueryParams;
use crate::models::{Campaign, CampaignStatus, Payload, Reply, SortOrder};
use crate::{ListmonkClient, ListmonkResult};

/// Provides methods for managing campaigns and their lifecycle.
#[derive(Debug)]
pub struct CampaignHandler {
    client: ListmonkClient,
}

impl CampaignHandler {
    pub(crate) fn new(client: ListmonkClient) -> Self {
        Self { client }
    }

    /// Lists campaigns.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use listmonk_client::ListmonkClient;
    /// #
    /// # async fn example(client: &ListmonkClient) -> Result<(), listmonk_client::ListmonkError> {
    /// let drafts = client.campaigns().list().status("draft").send().await?;
    /// println!("{} drafts", drafts.data().map_or(0, Vec::len));
    /// # Ok(())
    /// # }
    /// ```
    pub fn list(&self) -> ListCampaignsBuilder {
        ListCampaignsBuilder::new(self.client.clone())
    }

    /// Fetches a single campaign by ID.
    pub async fn get(&self, id: i64) -> ListmonkResult<Reply<Campaign>> {
        self.client
            .request(Method::GET, &format!("campaigns/{id}"), &[], None::<()>)
            .await
    }

    /// Creates a campaign from a field map (`name`, `subject`, `lists`,
    /// `from_email`, `content_type`, `body`, `template_id`, ...).
    pub async fn create(&self, campaign: Payload) -> ListmonkResult<Reply<Campaign>> {
        self.client
            .request(Method::POST, "campaigns", &[], Some(campaign))
            .await
    }

    /// Updates a campaign. Only the fields present in `changes` are modified.
    pub async fn update(&self, id: i64, changes: Payload) -> ListmonkResult<Reply<Campaign>> {
        self.client
            .request(Method::PUT, &format!("campaigns/{id}"), &[], Some(changes))
            .await
    }

    /// Deletes a campaign.
    pub async fn delete(&self, id: i64) -> ListmonkResult<Reply<Value>> {
        self.client
            .request(Method::DELETE, &format!("campaigns/{id}"), &[], None::<()>)
            .await
    }

    /// Changes a campaign's status.
    ///
    /// Whether the transition is allowed is decided by the server; a refused
    /// transition comes back as a non-success [`Reply`].
    pub async fn update_status(
        &self,
        id: i64,
        status: impl Into<String>,
    ) -> ListmonkResult<Reply<Campaign>> {
        let status: String = status.into();
        let body = json!({ "status": status });
        self.client
            .request(Method::PUT, &format!("campaigns/{id}/status"), &[], Some(body))
            .await
    }

    /// Starts sending a campaign.
    pub async fn start(&self, id: i64) -> ListmonkResult<Reply<Campaign>> {
        self.update_status(id, CampaignStatus::Running).await
    }

    /// Pauses a running campaign.
    pub async fn pause(&self, id: i64) -> ListmonkResult<Reply<Campaign>> {
        self.update_status(id, CampaignStatus::Paused).await
    }

    /// Cancels a campaign.
    pub async fn cancel(&self, id: i64) -> ListmonkResult<Reply<Campaign>> {
        self.update_status(id, CampaignStatus::Cancelled).await
    }

    /// Schedules a campaign for its `send_at` time.
    pub async fn schedule(&self, id: i64) -> ListmonkResult<Reply<Campaign>> {
        self.update_status(id, CampaignStatus::Scheduled).await
    }
}

#[derive(Debug, Clone)]
pub struct ListCampaignsBuilder {
    client: ListmonkClient,
    page: Option<u32>,
    per_page: Option<u32>,
    query: Option<String>,
    status: Option<String>,
    order_by: Option<String>,
    order: Option<SortOrder>,
}

impl ListCampaignsBuilder {
    pub(crate) fn new(client: ListmonkClient) -> Self {
        Self {
            client,
            page: None,
            per_page: None,
            query: None,
            status: None,
            order_by: None,
            order: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Search campaigns by name or subject.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Only return campaigns in this status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub async fn send(self) -> ListmonkResult<Reply<Vec<Campaign>>> {
        let mut params = QueryParams::default();
        params
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push("query", self.query)
            .push("status", self.status)
            .push("order_by", self.order_by)
            .push("order", self.order);

        self.client
            .request(Method::GET, "campaigns", params.as_slice(), None::<()>)
            .await
    }
}
