//! Logo API.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::client::AdminClient;
use crate::error::Result;
use crate::operations::{DELETE_LOGO, GET_LOGO, UPDATE_LOGO};
use crate::response::Payload;
use crate::types::LogoUpload;

/// Logo API client.
pub struct LogoApi {
    client: AdminClient,
}

impl LogoApi {
    pub(crate) fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// Fetch the account logo.
    ///
    /// An `image/*` response comes back as [`Payload::Binary`] with the body
    /// untouched; anything else is decoded as a regular envelope.
    pub async fn get(&self) -> Result<Payload> {
        self.client.call_payload(&GET_LOGO, &[], &()).await
    }

    /// Replace the account logo with the given PNG bytes.
    pub async fn update(&self, png: &[u8]) -> Result<()> {
        let upload = LogoUpload {
            logo: STANDARD.encode(png),
        };
        self.client.call_unit(&UPDATE_LOGO, &[], &upload).await
    }

    /// Remove the account logo.
    pub async fn delete(&self) -> Result<()> {
        self.client.call_unit(&DELETE_LOGO, &[], &()).await
    }
}
