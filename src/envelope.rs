//! JSON envelope returned by the fact endpoint.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::UserConfig;

/// The only value ever placed in `status`.
pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub email: String,
    pub name: String,
    pub stack: String,
}

impl From<&UserConfig> for UserInfo {
    fn from(user: &UserConfig) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            stack: user.stack.clone(),
        }
    }
}

/// Response body of `GET /fact`. Built once per request and never cached.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub status: &'static str,
    pub user: UserInfo,
    pub timestamp: String,
    pub fact: String,
}

impl ResponseEnvelope {
    /// Build an envelope stamped with the current instant.
    pub fn new(user: UserInfo, fact: String) -> Self {
        Self::at(Utc::now(), user, fact)
    }

    pub fn at(now: DateTime<Utc>, user: UserInfo, fact: String) -> Self {
        Self {
            status: STATUS_SUCCESS,
            user,
            timestamp: format_timestamp(now),
            fact,
        }
    }
}

/// Format as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
