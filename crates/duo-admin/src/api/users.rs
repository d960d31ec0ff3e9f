//! Users API.

use serde_json::Value;

use crate::client::AdminClient;
use crate::error::Result;
use crate::operations::{
    ADD_USER, ADD_USER_PHONE, ADD_USER_TOKEN, DELETE_USER, DELETE_USER_PHONE, DELETE_USER_TOKEN,
    GET_USER, GET_USER_BYPASS_CODES, GET_USER_PHONES, GET_USER_TOKENS, GET_USERS, UPDATE_USER,
};
use crate::types::{BypassCodes, NewUser, PhoneLink, TokenLink, UserUpdate, UsernameQuery};

/// Users API client.
pub struct UsersApi {
    client: AdminClient,
}

impl UsersApi {
    pub(crate) fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// List all users.
    pub async fn list(&self) -> Result<Value> {
        self.client.call(&GET_USERS, &[], &()).await
    }

    /// Get a user by ID.
    pub async fn get(&self, user_id: &str) -> Result<Value> {
        self.client.call(&GET_USER, &[user_id], &()).await
    }

    /// Find users by username. Returns a list of zero or one users.
    pub async fn find_by_name(&self, username: &str) -> Result<Value> {
        self.client
            .call(&GET_USERS, &[], &UsernameQuery { username })
            .await
    }

    /// Create a user.
    pub async fn add(&self, user: NewUser) -> Result<Value> {
        self.client.call(&ADD_USER, &[], &user).await
    }

    /// Update a user. Fails locally if `update` sets nothing.
    pub async fn update(&self, user_id: &str, update: UserUpdate) -> Result<Value> {
        self.client.call(&UPDATE_USER, &[user_id], &update).await
    }

    /// Delete a user. Deleting an already deleted user succeeds.
    pub async fn delete(&self, user_id: &str) -> Result<()> {
        self.client.call_unit(&DELETE_USER, &[user_id], &()).await
    }

    /// Replace a user's bypass codes, returning the new codes.
    pub async fn bypass_codes(&self, user_id: &str, options: BypassCodes) -> Result<Value> {
        self.client
            .call(&GET_USER_BYPASS_CODES, &[user_id], &options)
            .await
    }

    /// List the phones associated with a user.
    pub async fn phones(&self, user_id: &str) -> Result<Value> {
        self.client.call(&GET_USER_PHONES, &[user_id], &()).await
    }

    /// Associate a phone with a user.
    pub async fn add_phone(&self, user_id: &str, phone_id: &str) -> Result<Value> {
        self.client
            .call(&ADD_USER_PHONE, &[user_id], &PhoneLink { phone_id })
            .await
    }

    /// Dissociate a phone from a user.
    pub async fn remove_phone(&self, user_id: &str, phone_id: &str) -> Result<()> {
        self.client
            .call_unit(&DELETE_USER_PHONE, &[user_id, phone_id], &())
            .await
    }

    /// List the hardware tokens associated with a user.
    pub async fn tokens(&self, user_id: &str) -> Result<Value> {
        self.client.call(&GET_USER_TOKENS, &[user_id], &()).await
    }

    /// Associate a hardware token with a user.
    pub async fn add_token(&self, user_id: &str, token_id: &str) -> Result<Value> {
        self.client
            .call(&ADD_USER_TOKEN, &[user_id], &TokenLink { token_id })
            .await
    }

    /// Dissociate a hardware token from a user.
    pub async fn remove_token(&self, user_id: &str, token_id: &str) -> Result<()> {
        self.client
            .call_unit(&DELETE_USER_TOKEN, &[user_id, token_id], &())
            .await
    }
}
