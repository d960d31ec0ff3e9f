//! Integrations API.

use serde_json::Value;

use crate::client::AdminClient;
use crate::error::Result;
use crate::operations::{
    CREATE_INTEGRATION, DELETE_INTEGRATION, GET_INTEGRATION, GET_INTEGRATIONS, UPDATE_INTEGRATION,
};
use crate::types::{IntegrationUpdate, NewIntegration};

/// Integrations API client.
pub struct IntegrationsApi {
    client: AdminClient,
}

impl IntegrationsApi {
    pub(crate) fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// List all integrations.
    pub async fn list(&self) -> Result<Value> {
        self.client.call(&GET_INTEGRATIONS, &[], &()).await
    }

    /// Get an integration by integration key.
    pub async fn get(&self, integration_key: &str) -> Result<Value> {
        self.client
            .call(&GET_INTEGRATION, &[integration_key], &())
            .await
    }

    /// Create an integration.
    pub async fn create(&self, integration: NewIntegration) -> Result<Value> {
        self.client.call(&CREATE_INTEGRATION, &[], &integration).await
    }

    /// Delete an integration.
    pub async fn delete(&self, integration_key: &str) -> Result<()> {
        self.client
            .call_unit(&DELETE_INTEGRATION, &[integration_key], &())
            .await
    }

    /// Update an integration. Fails locally if `update` sets nothing.
    pub async fn update(&self, integration_key: &str, update: IntegrationUpdate) -> Result<Value> {
        self.client
            .call(&UPDATE_INTEGRATION, &[integration_key], &update)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::transport::MockTransport;
    use crate::{AdminApiPermissions, AdminClient, IntegrationUpdate, NewIntegration};

    fn client(mock: &Arc<MockTransport>) -> AdminClient {
        AdminClient::builder()
            .host("api-test.duosecurity.com")
            .transport(mock.clone())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_sends_type_and_flags() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"integration_key": "DI1"}));

        let integration = NewIntegration {
            permissions: AdminApiPermissions {
                adminapi_info: Some(false),
                ..Default::default()
            },
            ..NewIntegration::new("Reporting", "adminapi")
        };
        client(&mock).integrations().create(integration).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.path, "/admin/v1/integrations");
        assert_eq!(request.params.get("type"), Some("adminapi"));
        assert_eq!(request.params.get("adminapi_info"), Some("0"));
        assert!(!request.params.contains("adminapi_admins"));
    }

    #[tokio::test]
    async fn test_reset_secret_key_false_still_resets() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"integration_key": "DI1"}));

        let update = IntegrationUpdate {
            reset_secret_key: Some(false),
            ..Default::default()
        };
        client(&mock)
            .integrations()
            .update("DI1", update)
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.path, "/admin/v1/integrations/DI1");
        assert_eq!(
            request.params.iter().collect::<Vec<_>>(),
            vec![("reset_secret_key", "1")]
        );
    }

    #[tokio::test]
    async fn test_update_without_values_is_rejected() {
        let mock = Arc::new(MockTransport::new());
        let err = client(&mock)
            .integrations()
            .update("DI1", IntegrationUpdate::default())
            .await
            .unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_get_encodes_key() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"integration_key": "DI/1"}));

        client(&mock).integrations().get("DI/1").await.unwrap();
        assert_eq!(
            mock.last_request().unwrap().path,
            "/admin/v1/integrations/DI%2F1"
        );
    }
}
