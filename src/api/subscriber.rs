use reqwest::Method;
use serde_json::Value;

use super::QueryParams;
use crate::models::{Payload, Reply, SortOrder, Subscriber};
use crate::{ListmonkClient, ListmonkResult};

/// Provides methods for managing subscribers.
#[derive(Debug)]
pub struct SubscriberHandler {
    client: ListmonkClient,
}

impl SubscriberHandler {
    /// Creates a new subscriber API instance.
    ///
    /// This method is intended for internal use by the Listmonk client.
    pub(crate) fn new(client: ListmonkClient) -> Self {
        Self { client }
    }

    /// Lists subscribers.
    ///
    /// # Returns
    ///
    /// Returns a `ListSubscribersBuilder` instance, which allows for setting
    /// optional filters before sending the request.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use listmonk_client::{ListmonkClient, SortOrder};
    /// #
    /// # async fn example(client: &ListmonkClient) -> Result<(), listmonk_client::ListmonkError> {
    /// let subscribers = client
    ///     .subscribers()
    ///     .list()
    ///     .page(1)
    ///     .per_page(50)
    ///     .list_id(3)
    ///     .order_by("created_at")
    ///     .order(SortOrder::Desc)
    ///     .send()
    ///     .await?
    ///     .into_data()?;
    ///
    /// for subscriber in subscribers {
    ///     println!("{} <{}>", subscriber.name, subscriber.email);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list(&self) -> ListSubscribersBuilder {
        ListSubscribersBuilder::new(self.client.clone())
    }

    /// Fetches a single subscriber by ID.
    pub async fn get(&self, id: i64) -> ListmonkResult<Reply<Subscriber>> {
        self.client
            .request(Method::GET, &format!("subscribers/{id}"), &[], None::<()>)
            .await
    }

    /// Creates a subscriber.
    ///
    /// # Arguments
    ///
    /// * `subscriber` - Field map sent as-is, e.g. `email`, `name`, `status`,
    ///   `lists`, `attribs`, `preconfirm_subscriptions`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use listmonk_client::ListmonkClient;
    /// # use serde_json::json;
    /// #
    /// # async fn example(client: &ListmonkClient) -> Result<(), listmonk_client::ListmonkError> {
    /// let body = json!({
    ///     "email": "newuser@example.com",
    ///     "name": "New User",
    ///     "status": "enabled",
    ///     "lists": [1]
    /// });
    ///
    /// let reply = client
    ///     .subscribers()
    ///     .create(body.as_object().cloned().unwrap_or_default())
    ///     .await?;
    ///
    /// if !reply.is_success() {
    ///     eprintln!("create failed with {}", reply.status());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, subscriber: Payload) -> ListmonkResult<Reply<Subscriber>> {
        self.client
            .request(Method::POST, "subscribers", &[], Some(subscriber))
            .await
    }

    /// Updates a subscriber.
    ///
    /// Only the fields present in `changes` are modified.
    pub async fn update(&self, id: i64, changes: Payload) -> ListmonkResult<Reply<Subscriber>> {
        self.client
            .request(Method::PUT, &format!("subscribers/{id}"), &[], Some(changes))
            .await
    }

    /// Deletes a subscriber.
    pub async fn delete(&self, id: i64) -> ListmonkResult<Reply<Value>> {
        self.client
            .request(Method::DELETE, &format!("subscribers/{id}"), &[], None::<()>)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct ListSubscribersBuilder {
    client: ListmonkClient,
    page: Option<u32>,
    per_page: Option<u32>,
    order_by: Option<String>,
    order: Option<SortOrder>,
    query: Option<String>,
    list_id: Option<i64>,
}

impl ListSubscribersBuilder {
    pub(crate) fn new(client: ListmonkClient) -> Self {
        Self {
            client,
            page: None,
            per_page: None,
            order_by: None,
            order: None,
            query: None,
            list_id: None,
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

    /// Field to sort by, e.g. `name`, `status`, `created_at`.
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// SQL expression used to filter subscribers server-side.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Only return members of this list.
    pub fn list_id(mut self, list_id: i64) -> Self {
        self.list_id = Some(list_id);
        self
    }

    pub async fn send(self) -> ListmonkResult<Reply<Vec<Subscriber>>> {
        let mut params = QueryParams::default();
        params
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push("order_by", self.order_by)
            .push("order", self.order)
            .push("query", self.query)
            .push("list_id", self.list_id);

        self.client
            .request(Method::GET, "subscribers", params.as_slice(), None::<()>)
            .await
    }
}
