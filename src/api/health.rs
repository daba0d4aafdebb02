use reqwest::Method;

use crate::models::Reply;
use crate::{ListmonkClient, ListmonkResult};

/// Server liveness check.
#[derive(Debug)]
pub struct HealthHandler {
    client: ListmonkClient,
}

impl HealthHandler {
    pub(crate) fn new(client: ListmonkClient) -> Self {
        Self { client }
    }

    /// Checks that the server is up. The reply data is `true` when healthy.
    pub async fn check(&self) -> ListmonkResult<Reply<bool>> {
        self.client
            .request(Method::GET, "health", &[], None::<()>)
            .await
    }
}
