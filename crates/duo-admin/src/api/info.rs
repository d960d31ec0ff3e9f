//! Info API: account summary and usage reports.

use serde_json::Value;

use crate::client::AdminClient;
use crate::error::Result;
use crate::operations::{
    GET_AUTHENTICATION_ATTEMPTS, GET_INFO_SUMMARY, GET_TELEPHONY_CREDITS_USED,
    GET_USER_AUTHENTICATION_ATTEMPTS,
};
use crate::types::TimeRange;

/// Info API client.
pub struct InfoApi {
    client: AdminClient,
}

impl InfoApi {
    pub(crate) fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// Get a summary of account usage.
    pub async fn summary(&self) -> Result<Value> {
        self.client.call(&GET_INFO_SUMMARY, &[], &()).await
    }

    /// Telephony credits used within `range`.
    pub async fn telephony_credits_used(&self, range: TimeRange) -> Result<Value> {
        self.client
            .call(&GET_TELEPHONY_CREDITS_USED, &[], &range)
            .await
    }

    /// Authentication attempt counts by result within `range`.
    pub async fn authentication_attempts(&self, range: TimeRange) -> Result<Value> {
        self.client
            .call(&GET_AUTHENTICATION_ATTEMPTS, &[], &range)
            .await
    }

    /// Number of users who attempted authentication within `range`.
    pub async fn user_authentication_attempts(&self, range: TimeRange) -> Result<Value> {
        self.client
            .call(&GET_USER_AUTHENTICATION_ATTEMPTS, &[], &range)
            .await
    }
}
