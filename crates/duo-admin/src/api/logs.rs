//! Logs API.
//!
//! Every returned record is tagged with `eventtype` and `host`. Records are
//! returned in server order; callers page forward by passing the newest
//! timestamp seen as the next `mintime`.

use crate::client::{AdminClient, log_api_error};
use crate::error::Result;
use crate::operations::{
    GET_ADMINISTRATOR_LOG, GET_AUTHENTICATION_LOG, GET_TELEPHONY_LOG, Operation,
};
use crate::response::{self, LogRecord};
use crate::types::LogQuery;

/// Logs API client.
pub struct LogsApi {
    client: AdminClient,
}

impl LogsApi {
    pub(crate) fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// Administrator actions at or after `mintime` (Unix seconds).
    pub async fn administrator(&self, mintime: u64) -> Result<Vec<LogRecord>> {
        self.fetch(&GET_ADMINISTRATOR_LOG, "administrator", mintime)
            .await
    }

    /// Authentication attempts at or after `mintime` (Unix seconds).
    pub async fn authentication(&self, mintime: u64) -> Result<Vec<LogRecord>> {
        self.fetch(&GET_AUTHENTICATION_LOG, "authentication", mintime)
            .await
    }

    /// Telephony events at or after `mintime` (Unix seconds).
    pub async fn telephony(&self, mintime: u64) -> Result<Vec<LogRecord>> {
        self.fetch(&GET_TELEPHONY_LOG, "telephony", mintime).await
    }

    async fn fetch(
        &self,
        op: &Operation,
        event_type: &str,
        mintime: u64,
    ) -> Result<Vec<LogRecord>> {
        let raw = self.client.call_raw(op, &[], &LogQuery { mintime }).await?;
        let mut rows = response::log_rows(&raw).inspect_err(|e| log_api_error(op, e))?;
        response::decorate_rows(&mut rows, event_type, self.client.host());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};

    use crate::AdminClient;
    use crate::transport::MockTransport;

    fn client(mock: &Arc<MockTransport>) -> AdminClient {
        AdminClient::builder()
            .host("api-test.duosecurity.com")
            .transport(mock.clone())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_each_log_is_tagged_with_its_event_type() {
        let mock = Arc::new(MockTransport::new());
        for _ in 0..3 {
            mock.push_ok(json!([{"timestamp": 1346172697, "username": "alice"}]));
        }
        let logs = client(&mock).logs();

        let admin = logs.administrator(0).await.unwrap();
        let auth = logs.authentication(0).await.unwrap();
        let phone = logs.telephony(0).await.unwrap();

        for (rows, event_type) in [
            (admin, "administrator"),
            (auth, "authentication"),
            (phone, "telephony"),
        ] {
            assert_eq!(rows.len(), 1);
            let row = &rows[0];
            assert_eq!(row["eventtype"], event_type);
            assert_eq!(row["host"], "api-test.duosecurity.com");
            assert_eq!(row["timestamp"], 1346172697);
            assert_eq!(row["username"], "alice");
            assert_eq!(row.len(), 4);
        }

        let paths: Vec<_> = mock.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/admin/v1/logs/administrator",
                "/admin/v1/logs/authentication",
                "/admin/v1/logs/telephony",
            ]
        );
    }

    #[tokio::test]
    async fn test_mintime_is_always_sent() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!([]));
        mock.push_ok(json!([]));
        let logs = client(&mock).logs();

        assert!(logs.authentication(0).await.unwrap().is_empty());
        logs.authentication(1_346_172_698).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].params.get("mintime"), Some("0"));
        assert_eq!(requests[1].params.get("mintime"), Some("1346172698"));
    }

    #[tokio::test]
    async fn test_rows_keep_order_and_duplicates() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!([
            {"timestamp": 2, "action": "user_create"},
            {"timestamp": 1, "action": "user_delete"},
            {"timestamp": 1, "action": "user_delete"}
        ]));

        let rows = client(&mock).logs().administrator(0).await.unwrap();
        let timestamps: Vec<&Value> = rows.iter().map(|r| &r["timestamp"]).collect();
        assert_eq!(timestamps, vec![&json!(2), &json!(1), &json!(1)]);
    }

    #[tokio::test]
    async fn test_account_scoped_logs() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!([]));
        let client = AdminClient::builder()
            .host("api-test.duosecurity.com")
            .account_id("DA1")
            .transport(mock.clone())
            .build()
            .unwrap();

        client.logs().telephony(5).await.unwrap();

        let params = mock.last_request().unwrap().params;
        assert_eq!(params.names(), vec!["mintime", "account_id"]);
    }
}
