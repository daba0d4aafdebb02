//! # listmonk-client
//!
//! A Rust client library for the [Listmonk](https://listmonk.app) newsletter
//! and mailing list manager API.
//!
//! This crate provides a type-safe, async interface for managing subscribers,
//! mailing lists and campaigns, and for sending transactional messages.
//!
//! ## Features
//!
//! - 🔐 HTTP basic authentication, validated when the client is built
//! - 👥 Subscribers, lists and campaigns (list, get, create, update, delete)
//! - ✉️ Transactional messages through templates
//! - 🔄 Async API on top of `reqwest`
//! - 🛡️ Non-success statuses returned as values, not errors
//!
//! ## Example
//!
//! ```rust,no_run
//! use listmonk_client::{ListmonkClient, TransactionalMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ListmonkClient::builder()
//!         .base_url("http://localhost:9000/api")
//!         .basic_auth("api-user", "api-token")
//!         .build()?;
//!
//!     // Make sure the server is up
//!     let healthy = client.health().check().await?.into_data()?;
//!     println!("Healthy: {healthy}");
//!
//!     // First page of subscribers
//!     let reply = client.subscribers().list().page(1).per_page(10).send().await?;
//!     for subscriber in reply.data().into_iter().flatten() {
//!         println!("{} <{}>", subscriber.name, subscriber.email);
//!     }
//!
//!     // Look up a subscriber that may not exist
//!     let reply = client.subscribers().get(42).await?;
//!     if reply.status() == http::StatusCode::NOT_FOUND {
//!         println!("No subscriber 42");
//!     }
//!
//!     // Send a transactional message
//!     let message = TransactionalMessage::builder(2)
//!         .subscriber_email("user@example.com")
//!         .data_entry("order_id", "1234")
//!         .build()?;
//!     client.transactional().send(&message).await?;
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
pub mod models;

pub use api::campaign::{CampaignHandler, ListCampaignsBuilder};
pub use api::health::HealthHandler;
pub use api::list::{ListHandler, ListListsBuilder};
pub use api::subscriber::{ListSubscribersBuilder, SubscriberHandler};
pub use api::transactional::TransactionalHandler;
pub use client::{HttpLogLevel, ListmonkClient, ListmonkClientBuilder};
pub use error::{ListmonkError, ListmonkResult, UrlParseError};
pub use models::{
    ApiResponse, Campaign, CampaignList, CampaignStatus, ErrorBody, MailingList, Payload, Reply,
    SortOrder, Subscriber, SubscriberList, TransactionalMessage, TransactionalMessageBuilder,
};
