use reqwest::Method;

use crate::models::{Reply, TransactionalMessage};
use crate::{ListmonkClient, ListmonkResult};

/// Sends template-driven one-off messages.
#[derive(Debug)]
pub struct TransactionalHandler {
    client: ListmonkClient,
}

impl TransactionalHandler {
    pub(crate) fn new(client: ListmonkClient) -> Self {
        Self { client }
    }

    /// Sends a transactional message.
    ///
    /// The reply data is `true` when the server accepted the message.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use listmonk_client::{ListmonkClient, TransactionalMessage};
    /// #
    /// # async fn example(client: &ListmonkClient) -> Result<(), listmonk_client::ListmonkError> {
    /// let message = TransactionalMessage::builder(2)
    ///     .subscriber_email("user@example.com")
    ///     .data_entry("order_id", "1234")
    ///     .content_type("html")
    ///     .build()?;
    ///
    /// let reply = client.transactional().send(&message).await?;
    /// match reply.error() {
    ///     None => println!("sent"),
    ///     Some(err) => eprintln!("rejected ({}): {:?}", reply.status(), err.message),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, message: &TransactionalMessage) -> ListmonkResult<Reply<bool>> {
        self.client
            .request(Method::POST, "tx", &[], Some(message))
            .await
    }
}
