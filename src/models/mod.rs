//! Data models for the Listmonk API.
//!
//! This module contains the various data structures used in the Listmonk API.
//! Resource models ignore unknown fields, so newer server versions that add
//! fields keep decoding.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// Export submodules
pub mod api_response;
pub mod campaign;
pub mod mailing_list;
pub mod subscriber;
pub mod transactional;

pub use api_response::{ApiResponse, ErrorBody, Reply};
pub use campaign::{Campaign, CampaignList, CampaignStatus};
pub use mailing_list::MailingList;
pub use subscriber::{Subscriber, SubscriberList};
pub use transactional::{TransactionalMessage, TransactionalMessageBuilder};

/// Open field map used for create and partial-update bodies, subscriber
/// attributes and template data.
///
/// The server owns the shape of these objects; only the supplied keys are
/// sent.
pub type Payload = Map<String, Value>;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    Asc,

    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Wire value of the sort direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
