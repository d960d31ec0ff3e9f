//! Hardware tokens API.

use serde_json::Value;

use crate::client::AdminClient;
use crate::error::Result;
use crate::operations::{ADD_TOKEN, DELETE_TOKEN, GET_TOKEN, GET_TOKENS, RESYNC_TOKEN};
use crate::types::{NewToken, TokenLookup, TokenResync, TokenType};

/// Hardware tokens API client.
pub struct TokensApi {
    client: AdminClient,
}

impl TokensApi {
    pub(crate) fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// List all hardware tokens.
    pub async fn list(&self) -> Result<Value> {
        self.client.call(&GET_TOKENS, &[], &()).await
    }

    /// Get a hardware token by ID.
    pub async fn get(&self, token_id: &str) -> Result<Value> {
        self.client.call(&GET_TOKEN, &[token_id], &()).await
    }

    /// Find tokens by type and serial number. Returns zero or one tokens.
    pub async fn find_by_serial(&self, token_type: TokenType, serial: &str) -> Result<Value> {
        self.client
            .call(&GET_TOKENS, &[], &TokenLookup { token_type, serial })
            .await
    }

    /// Delete a hardware token. Deleting an already deleted token succeeds.
    pub async fn delete(&self, token_id: &str) -> Result<()> {
        self.client.call_unit(&DELETE_TOKEN, &[token_id], &()).await
    }

    /// Add a 6-digit HOTP token.
    pub async fn add_hotp6(&self, serial: &str, secret: &str) -> Result<Value> {
        self.add_hotp(TokenType::Hotp6, serial, secret).await
    }

    /// Add an 8-digit HOTP token.
    pub async fn add_hotp8(&self, serial: &str, secret: &str) -> Result<Value> {
        self.add_hotp(TokenType::Hotp8, serial, secret).await
    }

    async fn add_hotp(&self, token_type: TokenType, serial: &str, secret: &str) -> Result<Value> {
        let token = NewToken {
            token_type,
            serial,
            secret: Some(secret),
            private_id: None,
            aes_key: None,
        };
        self.client.call(&ADD_TOKEN, &[], &token).await
    }

    /// Add a YubiKey AES token.
    pub async fn add_yubikey(&self, serial: &str, private_id: &str, aes_key: &str) -> Result<Value> {
        let token = NewToken {
            token_type: TokenType::Yubikey,
            serial,
            secret: None,
            private_id: Some(private_id),
            aes_key: Some(aes_key),
        };
        self.client.call(&ADD_TOKEN, &[], &token).await
    }

    /// Resynchronize an HOTP token from three consecutive codes.
    pub async fn resync(&self, token_id: &str, codes: [&str; 3]) -> Result<()> {
        let [code1, code2, code3] = codes;
        self.client
            .call_unit(&RESYNC_TOKEN, &[token_id], &TokenResync { code1, code2, code3 })
            .await
    }
}
