//! Administrators API.

use serde_json::Value;

use crate::client::AdminClient;
use crate::error::Result;
use crate::operations::{
    ACTIVATE_ADMIN, ADD_ADMIN, DELETE_ADMIN, GET_ADMIN, GET_ADMINS, RESET_ADMIN, UPDATE_ADMIN,
};
use crate::types::{AdminActivation, AdminUpdate, NewAdmin};

/// Administrators API client.
pub struct AdminsApi {
    client: AdminClient,
}

impl AdminsApi {
    pub(crate) fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// List all administrators.
    pub async fn list(&self) -> Result<Value> {
        self.client.call(&GET_ADMINS, &[], &()).await
    }

    /// Get an administrator by ID.
    pub async fn get(&self, admin_id: &str) -> Result<Value> {
        self.client.call(&GET_ADMIN, &[admin_id], &()).await
    }

    /// Create an administrator.
    pub async fn add(&self, admin: NewAdmin) -> Result<Value> {
        self.client.call(&ADD_ADMIN, &[], &admin).await
    }

    /// Update an administrator. Fails locally if `update` sets nothing.
    pub async fn update(&self, admin_id: &str, update: AdminUpdate) -> Result<Value> {
        self.client.call(&UPDATE_ADMIN, &[admin_id], &update).await
    }

    /// Delete an administrator.
    pub async fn delete(&self, admin_id: &str) -> Result<()> {
        self.client.call_unit(&DELETE_ADMIN, &[admin_id], &()).await
    }

    /// Reset an administrator's failed login attempts.
    pub async fn reset(&self, admin_id: &str) -> Result<()> {
        self.client.call_unit(&RESET_ADMIN, &[admin_id], &()).await
    }

    /// Create an activation link for a new administrator.
    pub async fn activate(&self, activation: AdminActivation) -> Result<Value> {
        self.client.call(&ACTIVATE_ADMIN, &[], &activation).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::transport::{Method, MockTransport};
    use crate::{AdminActivation, AdminClient, AdminUpdate, NewAdmin};

    fn client(mock: &Arc<MockTransport>) -> AdminClient {
        AdminClient::builder()
            .host("api-test.duosecurity.com")
            .transport(mock.clone())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_sends_password_field() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"admin_id": "DE1"}));

        let admin = NewAdmin {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "+15555550100".into(),
            password: "correct horse".into(),
        };
        client(&mock).admins().add(admin).await.unwrap();

        let params = mock.last_request().unwrap().params;
        assert_eq!(params.get("password"), Some("correct horse"));
        assert_eq!(params.get("phone"), Some("+15555550100"));
    }

    #[tokio::test]
    async fn test_update_without_values_is_rejected() {
        let mock = Arc::new(MockTransport::new());
        let err = client(&mock)
            .admins()
            .update("DE1", AdminUpdate::default())
            .await
            .unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_reset_posts_to_reset_path() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!(""));

        client(&mock).admins().reset("DE1").await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/admin/v1/admins/DE1/reset");
        assert!(request.params.is_empty());
    }

    #[tokio::test]
    async fn test_activate_always_sends_send_email() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"valid_days": 7}));

        let activation = AdminActivation {
            valid_days: Some(7),
            ..AdminActivation::new("new.admin@example.com")
        };
        client(&mock).admins().activate(activation).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.path, "/admin/v1/admins/activate");
        assert_eq!(
            request.params.iter().collect::<Vec<_>>(),
            vec![
                ("email", "new.admin@example.com"),
                ("send_email", "0"),
                ("valid_days", "7"),
            ]
        );
    }
}
