//! Settings API.

use serde_json::Value;

use crate::client::AdminClient;
use crate::error::Result;
use crate::operations::{GET_SETTINGS, UPDATE_SETTINGS};
use crate::types::SettingsUpdate;

/// Settings API client.
pub struct SettingsApi {
    client: AdminClient,
}

impl SettingsApi {
    pub(crate) fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// Get the account settings.
    pub async fn get(&self) -> Result<Value> {
        self.client.call(&GET_SETTINGS, &[], &()).await
    }

    /// Change account settings, returning the updated settings.
    ///
    /// Fails with a precondition error, without contacting the server, if
    /// `update` sets nothing.
    pub async fn update(&self, update: SettingsUpdate) -> Result<Value> {
        self.client.call(&UPDATE_SETTINGS, &[], &update).await
    }
}
