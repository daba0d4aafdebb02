use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{null_as_default, Payload};

/// A subscriber as returned by the Listmonk API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Server-assigned numeric ID.
    pub id: i64,

    /// Server-assigned UUID.
    pub uuid: String,

    /// E-mail address.
    pub email: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Subscriber status, e.g. `enabled`, `disabled` or `blocklisted`.
    #[serde(default)]
    pub status: String,

    /// Free-form custom attributes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub attribs: Payload,

    /// Lists the subscriber belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub lists: Vec<SubscriberList>,

    /// When the subscriber was created.
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,

    /// When the subscriber was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A list membership embedded in a [`Subscriber`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberList {
    /// List ID.
    pub id: i64,

    /// List name.
    #[serde(default)]
    pub name: String,

    /// Membership status, e.g. `unconfirmed`, `confirmed` or `unsubscribed`.
    #[serde(default)]
    pub subscription_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_subscriber() {
        let subscriber: Subscriber = serde_json::from_str(
            r#"{
                "id": 3,
                "uuid": "9b0a1b4e-1a72-4fc9-8d52-6cfa7e6cb3f1",
                "email": "john@example.com",
                "name": "John",
                "status": "enabled",
                "attribs": {"city": "Bengaluru", "projects": 3},
                "lists": [{"id": 1, "name": "Default list", "subscription_status": "unconfirmed"}],
                "created_at": "2020-02-10T23:07:16.199433+01:00",
                "updated_at": "2020-02-10T23:07:16.199433+01:00"
            }"#,
        )
        .unwrap();

        assert_eq!(subscriber.attribs["city"], "Bengaluru");
        assert_eq!(subscriber.attribs["projects"], 3);
        assert_eq!(subscriber.lists[0].subscription_status.as_deref(), Some("unconfirmed"));

        let created_at = subscriber.created_at.unwrap();
        assert_eq!(created_at.offset().local_minus_utc(), 3600);
        assert_eq!(created_at.to_rfc3339(), "2020-02-10T23:07:16.199433+01:00");
    }

    #[test]
    fn ignores_unknown_fields_and_nulls() {
        let subscriber: Subscriber = serde_json::from_str(
            r#"{
                "id": 7,
                "uuid": "u7",
                "email": "x@example.com",
                "attribs": null,
                "lists": null,
                "some_future_field": {"nested": true}
            }"#,
        )
        .unwrap();

        assert_eq!(subscriber.id, 7);
        assert!(subscriber.attribs.is_empty());
        assert!(subscriber.lists.is_empty());
        assert_eq!(subscriber.created_at, None);
    }
}
