use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl StatusCheck {
    /// Stamps a fresh id and the current time onto a validated name.
    pub fn new(client_name: ClientName) -> Self {
        Self {
            id: Uuid::now_v7(),
            client_name: client_name.into(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// A client name that is known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientName(String);

impl TryFrom<Option<String>> for ClientName {
    type Error = AppError;

    fn try_from(value: Option<String>) -> AppResult<Self> {
        match value {
            Some(name) if !name.is_empty() => Ok(ClientName(name)),
            _ => Err(AppError::Validation("client_name is required")),
        }
    }
}

impl From<ClientName> for String {
    fn from(name: ClientName) -> Self {
        name.0
    }
}
