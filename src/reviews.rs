//! Wire types for the reviews endpoint.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// An approved review, as served by the backend. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub name: String,

    #[serde(default)]
    pub city: String,

    pub message: String,

    /// 0 to 5 stars
    pub rating: u8,

    /// Missing or unparsable timestamps decode as `None`
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub approved_at: Option<DateTime<Utc>>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_timestamp))
}

/// Parse an ISO-8601 timestamp. Values without an offset are taken as UTC,
/// a bare date as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// A new review as collected by the form. Sent as-is; validating it
/// (including the `website` honeypot) happens before it gets here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub city: String,
    pub message: String,
    pub email: String,
    pub rating: u8,
    #[serde(default)]
    pub website: String,
}

/// Backend acknowledgment of a submission, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerAck(pub serde_json::Value);

impl ServerAck {
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

/// Pull the `reviews` list out of a response body. A missing or null
/// `reviews` field means there are none yet.
pub fn reviews_from_body(body: &[u8]) -> serde_json::Result<Vec<ReviewRecord>> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    match value.get("reviews") {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(reviews) => Vec::<ReviewRecord>::deserialize(reviews),
    }
}
