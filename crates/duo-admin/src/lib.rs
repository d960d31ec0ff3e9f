//! Typed async client for the Duo Security Admin API.
//!
//! Every call is a single signed HTTPS request against `/admin/v1`. Parameters
//! are flattened to string pairs, identifiers in paths are percent-encoded, and
//! the `{"stat": ..., "response": ...}` envelope is unwrapped before the value
//! reaches the caller.
//!
//! # Example
//!
//! ```no_run
//! use duo_admin::{AdminClient, Result, UserUpdate};
//!
//! # async fn example() -> Result<()> {
//! let client = AdminClient::builder()
//!     .host("api-xxxxxxxx.duosecurity.com")
//!     .credentials("DIXXXXXXXXXXXXXXXXXX", "secret")
//!     .build()?;
//!
//! // Look a user up by name
//! let matches = client.users().find_by_name("alice").await?;
//! println!("{matches}");
//!
//! // Disable them
//! let update = UserUpdate {
//!     status: Some(duo_admin::UserStatus::Disabled),
//!     ..Default::default()
//! };
//! client.users().update("DUXXXXXXXXXXXXXXXXXX", update).await?;
//!
//! // Pull recent authentication logs
//! for record in client.logs().authentication(1_346_172_697).await? {
//!     println!("{} {}", record["eventtype"], record["username"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Users**: CRUD, bypass codes, phone and token associations
//! - **Phones**: CRUD, lookup by number, SMS activation
//! - **Tokens**: CRUD, lookup by serial, HOTP resync
//! - **Settings**: read and update account settings
//! - **Info**: summary and usage reports
//! - **Integrations**: CRUD, secret key reset
//! - **Administrators**: CRUD, lockout reset, activation links
//! - **Logs**: administrator, authentication and telephony logs
//! - **Logo**: fetch, replace and remove the account logo

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod operations;
pub mod params;
pub mod path;
pub mod response;
pub mod signing;
pub mod transport;
pub mod types;

pub use client::{ACCOUNT_ID_PARAM, AdminClient, ClientBuilder};
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, Error, ErrorDetail, Result};
pub use params::Params;
pub use response::{LogRecord, Payload};
pub use signing::Credentials;
pub use transport::{
    HttpTransport, Method, MockTransport, RawResponse, RecordedRequest, Transport, TransportError,
};
pub use types::*;
