use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::Payload;
use crate::{ListmonkError, ListmonkResult};

/// Request body for sending a transactional message through a template.
///
/// Unset fields are left out of the JSON body entirely, so the server
/// applies its own defaults (template subject, default messenger, ...).
/// Exactly one recipient selector is expected by the server; the client
/// only checks that at least one is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionalMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_emails: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_ids: Option<Vec<i64>>,

    /// ID of the transactional template to render.
    pub template_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Template variables, available as `.Tx.Data` in the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,

    /// Extra mail headers, one single-entry map per header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<BTreeMap<String, String>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub messenger: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl TransactionalMessage {
    /// Create a new transactional message builder for the given template.
    pub fn builder(template_id: i64) -> TransactionalMessageBuilder {
        TransactionalMessageBuilder::new(template_id)
    }

    fn has_recipient(&self) -> bool {
        self.subscriber_email.is_some()
            || self.subscriber_id.is_some()
            || self.subscriber_emails.as_ref().is_some_and(|v| !v.is_empty())
            || self.subscriber_ids.as_ref().is_some_and(|v| !v.is_empty())
    }
}

/// Builder for [`TransactionalMessage`].
#[derive(Debug, Clone)]
pub struct TransactionalMessageBuilder {
    message: TransactionalMessage,
}

impl TransactionalMessageBuilder {
    fn new(template_id: i64) -> Self {
        Self {
            message: TransactionalMessage {
                subscriber_email: None,
                subscriber_id: None,
                subscriber_emails: None,
                subscriber_ids: None,
                template_id,
                from_email: None,
                subject: None,
                data: None,
                headers: None,
                messenger: None,
                content_type: None,
            },
        }
    }

    /// Send to the subscriber with this e-mail address.
    pub fn subscriber_email(mut self, email: impl Into<String>) -> Self {
        self.message.subscriber_email = Some(email.into());
        self
    }

    /// Send to the subscriber with this ID.
    pub fn subscriber_id(mut self, id: i64) -> Self {
        self.message.subscriber_id = Some(id);
        self
    }

    /// Send to several subscribers by e-mail address.
    pub fn subscriber_emails<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.message.subscriber_emails = Some(emails.into_iter().map(Into::into).collect());
        self
    }

    /// Send to several subscribers by ID.
    pub fn subscriber_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.message.subscriber_ids = Some(ids.into_iter().collect());
        self
    }

    /// Override the sender address.
    pub fn from_email(mut self, from_email: impl Into<String>) -> Self {
        self.message.from_email = Some(from_email.into());
        self
    }

    /// Override the template subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.message.subject = Some(subject.into());
        self
    }

    /// Replace the template data.
    pub fn data(mut self, data: Payload) -> Self {
        self.message.data = Some(data);
        self
    }

    /// Add a single template variable.
    pub fn data_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.message
            .data
            .get_or_insert_with(Payload::new)
            .insert(key.into(), value.into());
        self
    }

    /// Append a mail header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.message
            .headers
            .get_or_insert_with(Vec::new)
            .push(BTreeMap::from([(name.into(), value.into())]));
        self
    }

    /// Replace all mail headers.
    pub fn headers(mut self, headers: Vec<BTreeMap<String, String>>) -> Self {
        self.message.headers = Some(headers);
        self
    }

    /// Messenger to deliver through, e.g. `email`.
    pub fn messenger(mut self, messenger: impl Into<String>) -> Self {
        self.message.messenger = Some(messenger.into());
        self
    }

    /// `html`, `markdown` or `plain`.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.message.content_type = Some(content_type.into());
        self
    }

    /// Build the transactional message.
    pub fn build(self) -> ListmonkResult<TransactionalMessage> {
        if !self.message.has_recipient() {
            return Err(ListmonkError::InvalidMessage(
                "At least one recipient (subscriber email, id, emails or ids) is required".into(),
            ));
        }
        Ok(self.message)
    }
}
