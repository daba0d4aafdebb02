use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A campaign.
///
/// `status` moves through `draft`, `scheduled`, `running`, `paused`,
/// `finished` and `cancelled`; transitions are enforced by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,

    pub uuid: String,

    pub name: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub from_email: String,

    #[serde(default)]
    pub body: Option<String>,

    /// `richtext`, `html`, `markdown` or `plain`.
    #[serde(default)]
    pub content_type: Option<String>,

    /// Scheduled send time, if any.
    #[serde(default)]
    pub send_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub status: String,

    /// `regular` or `optin`.
    #[serde(rename = "type", default)]
    pub campaign_type: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub template_id: Option<i64>,

    #[serde(default)]
    pub messenger: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lists: Vec<CampaignList>,

    #[serde(default)]
    pub started_at: Option<DateTime<FixedOffset>>,

    /// Number of messages the campaign will send, computed by the server.
    #[serde(default)]
    pub to_send: Option<u64>,

    /// Number of messages sent so far.
    #[serde(default)]
    pub sent: Option<u64>,

    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A list reference embedded in a [`Campaign`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignList {
    pub id: i64,

    #[serde(default)]
    pub name: String,
}

/// Target states accepted by the campaign status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Scheduled,
    Running,
    Paused,
    Cancelled,
}

impl CampaignStatus {
    /// Wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Scheduled => "scheduled",
            CampaignStatus::Running => "running",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CampaignStatus> for String {
    fn from(status: CampaignStatus) -> Self {
        status.as_str().to_string()
    }
}
