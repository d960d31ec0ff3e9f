//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::api::{
    AdminsApi, InfoApi, IntegrationsApi, LogoApi, LogsApi, PhonesApi, SettingsApi, TokensApi,
    UsersApi,
};
use crate::config::{ConfigError, DEFAULT_TIMEOUT_SECS};
use crate::error::{Error, Result};
use crate::operations::Operation;
use crate::params::Params;
use crate::response::{self, Payload};
use crate::signing::Credentials;
use crate::transport::{self, HttpTransport, RawResponse, Transport};

/// Parameter carrying the child account for account-scoped clients.
pub const ACCOUNT_ID_PARAM: &str = "account_id";

/// Admin API client.
///
/// Cheap to clone; clones share the same transport and configuration, which
/// never changes after construction.
///
/// # Example
///
/// ```no_run
/// use duo_admin::{AdminClient, NewUser};
///
/// # async fn example() -> duo_admin::Result<()> {
/// let client = AdminClient::builder()
///     .host("api-xxxxxxxx.duosecurity.com")
///     .credentials("DIXXXXXXXXXXXXXXXXXX", "secret")
///     .build()?;
///
/// let user = client.users().add(NewUser::new("alice")).await?;
/// println!("created {}", user["user_id"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    host: String,
    account_id: Option<String>,
}

impl fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminClient")
            .field("host", &self.inner.host)
            .field("account_id", &self.inner.account_id)
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The API host, as stamped onto log records.
    pub fn host(&self) -> &str {
        &self.inner.host
    }

    /// The child account every request is scoped to, if any.
    pub fn account_id(&self) -> Option<&str> {
        self.inner.account_id.as_deref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the users API.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access the phones API.
    pub fn phones(&self) -> PhonesApi {
        PhonesApi::new(self.clone())
    }

    /// Access the hardware tokens API.
    pub fn tokens(&self) -> TokensApi {
        TokensApi::new(self.clone())
    }

    /// Access the settings API.
    pub fn settings(&self) -> SettingsApi {
        SettingsApi::new(self.clone())
    }

    /// Access the info (usage report) API.
    pub fn info(&self) -> InfoApi {
        InfoApi::new(self.clone())
    }

    /// Access the integrations API.
    pub fn integrations(&self) -> IntegrationsApi {
        IntegrationsApi::new(self.clone())
    }

    /// Access the administrators API.
    pub fn admins(&self) -> AdminsApi {
        AdminsApi::new(self.clone())
    }

    /// Access the logs API.
    pub fn logs(&self) -> LogsApi {
        LogsApi::new(self.clone())
    }

    /// Access the logo API.
    pub fn logo(&self) -> LogoApi {
        LogoApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request execution
    // ─────────────────────────────────────────────────────────────────────────

    /// Build the final parameter set for `op`.
    fn assemble<P>(&self, op: &Operation, params: &P) -> Result<Params>
    where
        P: Serialize + ?Sized,
    {
        let mut params = Params::from_serialize(params)?;

        if op.requires_params && params.is_empty() {
            return Err(Error::Precondition(format!(
                "{}: no new values were provided",
                op.name
            )));
        }

        if let Some(account_id) = &self.inner.account_id {
            params.insert_if_absent(ACCOUNT_ID_PARAM, account_id);
        }

        Ok(params)
    }

    /// Send `op` and return the response as received.
    pub(crate) async fn call_raw<P>(
        &self,
        op: &Operation,
        ids: &[&str],
        params: &P,
    ) -> Result<RawResponse>
    where
        P: Serialize + ?Sized + Sync,
    {
        let params = self.assemble(op, params)?;
        let path = op.path(ids);

        debug!(
            operation = op.name,
            method = %op.method,
            path = %path,
            params = ?params.names(),
            "sending admin API request"
        );

        let response = self
            .inner
            .transport
            .call(op.method, &path, &params)
            .await
            .inspect_err(|e| warn!(operation = op.name, error = %e, "transport failure"))?;

        debug!(
            operation = op.name,
            status = response.status,
            "received admin API response"
        );
        Ok(response)
    }

    /// Send `op` and unwrap the JSON envelope.
    pub(crate) async fn call<P>(&self, op: &Operation, ids: &[&str], params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized + Sync,
    {
        let response = self.call_raw(op, ids, params).await?;
        response::decode_envelope(&response).inspect_err(|e| log_api_error(op, e))
    }

    /// Send `op`, discarding any payload.
    pub(crate) async fn call_unit<P>(&self, op: &Operation, ids: &[&str], params: &P) -> Result<()>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.call(op, ids, params).await.map(|_| ())
    }

    /// Send `op`, accepting a binary body when the operation allows it.
    pub(crate) async fn call_payload<P>(
        &self,
        op: &Operation,
        ids: &[&str],
        params: &P,
    ) -> Result<Payload>
    where
        P: Serialize + ?Sized + Sync,
    {
        let response = self.call_raw(op, ids, params).await?;
        response::normalize(response, op.may_return_binary).inspect_err(|e| log_api_error(op, e))
    }
}

pub(crate) fn log_api_error(op: &Operation, error: &Error) {
    if let Error::Api(err) = error {
        warn!(
            operation = op.name,
            status = err.status,
            code = ?err.code(),
            message = %err.message,
            "admin API call failed"
        );
    }
}

/// Builder for creating an [`AdminClient`].
pub struct ClientBuilder {
    host: Option<String>,
    base_url: Option<String>,
    credentials: Option<Credentials>,
    account_id: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("host", &self.host)
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("account_id", &self.account_id)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            host: None,
            base_url: None,
            credentials: None,
            account_id: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            transport: None,
        }
    }

    /// Set the API host, e.g. `api-xxxxxxxx.duosecurity.com`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Send requests to this URL instead of `https://{host}`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the integration key and secret key.
    pub fn credentials(
        mut self,
        integration_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(integration_key, secret_key));
        self
    }

    /// Scope every request to a child account.
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use a custom transport instead of the built-in HTTP transport.
    ///
    /// Credentials, base URL, timeout and user agent are then ignored.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AdminClient> {
        let base_url = match (&self.base_url, &self.host) {
            (Some(url), _) => Some(Url::parse(url)?),
            (None, Some(host)) => Some(Url::parse(&format!("https://{host}/"))?),
            (None, None) => None,
        };

        let host = match (self.host, &base_url) {
            (Some(host), _) => host,
            (None, Some(url)) => transport::signed_host(url)?,
            (None, None) => return Err(ConfigError::MissingField("host").into()),
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let credentials = self
                    .credentials
                    .ok_or(ConfigError::MissingField("credentials"))?;
                let base_url = base_url.ok_or(ConfigError::MissingField("host"))?;
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("duo-admin/{}", env!("CARGO_PKG_VERSION")));
                Arc::new(HttpTransport::new(
                    base_url,
                    credentials,
                    self.timeout,
                    &user_agent,
                )?)
            }
        };

        Ok(AdminClient {
            inner: Arc::new(ClientInner {
                transport,
                host,
                account_id: self.account_id,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{GET_USERS, UPDATE_SETTINGS};
    use crate::transport::{MockTransport, TransportError};
    use serde_json::json;

    fn mock_client(mock: &Arc<MockTransport>) -> AdminClient {
        ClientBuilder::new()
            .host("api-test.duosecurity.com")
            .transport(mock.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_host() {
        let err = ClientBuilder::new().credentials("i", "s").build().unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::MissingField("host"))));
    }

    #[test]
    fn test_builder_requires_credentials_for_http() {
        let err = ClientBuilder::new().host("api-test.duosecurity.com").build().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField("credentials"))
        ));
    }

    #[test]
    fn test_builder_derives_host_from_base_url() {
        let client = ClientBuilder::new()
            .base_url("http://127.0.0.1:9000")
            .credentials("i", "s")
            .build()
            .unwrap();
        assert_eq!(client.host(), "127.0.0.1:9000");
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let err = ClientBuilder::new()
            .base_url("not a url")
            .credentials("i", "s")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_account_id_is_injected() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!([]));
        let client = ClientBuilder::new()
            .host("api-test.duosecurity.com")
            .account_id("DA123")
            .transport(mock.clone())
            .build()
            .unwrap();

        client.call(&GET_USERS, &[], &()).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.params.get(ACCOUNT_ID_PARAM), Some("DA123"));
        assert_eq!(request.path, "/admin/v1/users");
    }

    #[tokio::test]
    async fn test_unscoped_client_sends_no_account_id() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!([]));
        let client = mock_client(&mock);

        client.call(&GET_USERS, &[], &()).await.unwrap();
        assert!(mock.last_request().unwrap().params.is_empty());
    }

    #[tokio::test]
    async fn test_empty_update_never_reaches_transport() {
        let mock = Arc::new(MockTransport::new());
        let client = ClientBuilder::new()
            .host("api-test.duosecurity.com")
            .account_id("DA123")
            .transport(mock.clone())
            .build()
            .unwrap();

        let err = client.call(&UPDATE_SETTINGS, &[], &()).await.unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_an_api_error() {
        let mock = Arc::new(MockTransport::new());
        mock.push_failure("connection refused");
        let client = mock_client(&mock);

        let err = client.call(&GET_USERS, &[], &()).await.unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Other(_))));
        assert!(err.api().is_none());
    }
}
