use reqwest::Method;
use serde_json::Value;

use super::QueryParams;
use crate::models::{MailingList, Payload, Reply, SortOrder};
use crate::{ListmonkClient, ListmonkResult};

/// Provides methods for managing mailing lists.
#[derive(Debug)]
pub struct ListHandler {
    client: ListmonkClient,
}

impl ListHandler {
    pub(crate) fn new(client: ListmonkClient) -> Self {
        Self { client }
    }

    /// Lists mailing lists.
    ///
    /// Returns a `ListListsBuilder`; call `.send()` on it to execute the
    /// request.
    pub fn list(&self) -> ListListsBuilder {
        ListListsBuilder::new(self.client.clone())
    }

    /// Fetches a single mailing list by ID.
    pub async fn get(&self, id: i64) -> ListmonkResult<Reply<MailingList>> {
        self.client
            .request(Method::GET, &format!("lists/{id}"), &[], None::<()>)
            .await
    }

    /// Creates a mailing list from a field map (`name`, `type`, `optin`,
    /// `tags`, `description`).
    pub async fn create(&self, list: Payload) -> ListmonkResult<Reply<MailingList>> {
        self.client
            .request(Method::POST, "lists", &[], Some(list))
            .await
    }

    /// Updates a mailing list. Only the fields present in `changes` are
    /// modified.
    pub async fn update(&self, id: i64, changes: Payload) -> ListmonkResult<Reply<MailingList>> {
        self.client
            .request(Method::PUT, &format!("lists/{id}"), &[], Some(changes))
            .await
    }

    /// Deletes a mailing list.
    pub async fn delete(&self, id: i64) -> ListmonkResult<Reply<Value>> {
        self.client
            .request(Method::DELETE, &format!("lists/{id}"), &[], None::<()>)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct ListListsBuilder {
    client: ListmonkClient,
    page: Option<u32>,
    per_page: Option<u32>,
    query: Option<String>,
    order_by: Option<String>,
    order: Option<SortOrder>,
}

impl ListListsBuilder {
    pub(crate) fn new(client: ListmonkClient) -> Self {
        Self {
            client,
            page: None,
            per_page: None,
            query: None,
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

    /// Search lists by name.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
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

    pub async fn send(self) -> ListmonkResult<Reply<Vec<MailingList>>> {
        let mut params = QueryParams::default();
        params
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push("query", self.query)
            .push("order_by", self.order_by)
            .push("order", self.order);

        self.client
            .request(Method::GET, "lists", params.as_slice(), None::<()>)
            .await
    }
}
