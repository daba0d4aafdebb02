use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A mailing list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailingList {
    pub id: i64,

    pub uuid: String,

    pub name: String,

    /// Visibility, `public` or `private`.
    #[serde(rename = "type", default)]
    pub list_type: String,

    /// Subscription confirmation policy, `single` or `double`.
    #[serde(default)]
    pub optin: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Number of subscribers on the list, computed by the server.
    #[serde(default)]
    pub subscriber_count: Option<u64>,

    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_list_with_renamed_type() {
        let list: MailingList = serde_json::from_str(
            r#"{
                "id": 1,
                "uuid": "list-uuid-1",
                "name": "Test List",
                "type": "private",
                "optin": "double",
                "tags": ["tag1"],
                "subscriber_count": 100
            }"#,
        )
        .unwrap();

        assert_eq!(list.list_type, "private");
        assert_eq!(list.optin, "double");
        assert_eq!(list.tags, vec!["tag1".to_string()]);
        assert_eq!(list.subscriber_count, Some(100));
        assert_eq!(list.description, None);
    }

    #[test]
    fn serializes_type_under_wire_name() {
        let list: MailingList = serde_json::from_str(
            r#"{"id": 2, "uuid": "u2", "name": "Weekly", "type": "public", "tags": null}"#,
        )
        .unwrap();

        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["type"], "public");
        assert!(value.get("list_type").is_none());
    }
}
