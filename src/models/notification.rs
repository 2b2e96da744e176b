use super::serde_helpers::{endpoint_or_unknown, null_as_default, unknown_endpoint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A predefined notification message, addressed by its `key` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTemplate {
    pub key: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub url: &'static str,
}

/// Payload posted to the notification API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    pub user_id: String,
    pub title: String,
    pub body: String,
    pub url: String,
}

impl NotificationRequest {
    /// Builds the payload for `user_id` from a predefined template.
    ///
    /// # Arguments
    /// * `user_id` - Recipient, copied as-is
    /// * `template` - Source of the title, body and url
    pub fn from_template(user_id: &str, template: &NotificationTemplate) -> Self {
        NotificationRequest {
            user_id: user_id.to_string(),
            title: template.title.to_string(),
            body: template.body.to_string(),
            url: template.url.to_string(),
        }
    }
}

/// Delivery summary returned by the API on HTTP 200.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct NotificationResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sent: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<DeliveryDetail>,
}

/// Outcome for a single subscribed device.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct DeliveryDetail {
    #[serde(default = "unknown_endpoint", deserialize_with = "endpoint_or_unknown")]
    pub endpoint: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// Diagnostic body of a rejected request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorBody {
    Json(serde_json::Value),
    Text(String),
}

impl ApiErrorBody {
    /// Keeps the body as JSON when it parses, otherwise as raw text.
    ///
    /// # Arguments
    /// * `raw` - Response text of the rejected request
    pub fn parse(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => ApiErrorBody::Json(value),
            Err(_) => ApiErrorBody::Text(raw),
        }
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorBody::Json(value) => match serde_json::to_string_pretty(value) {
                Ok(pretty) => f.write_str(&pretty),
                Err(_) => write!(f, "{}", value),
            },
            ApiErrorBody::Text(text) => f.write_str(text),
        }
    }
}
