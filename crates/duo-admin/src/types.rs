//! Request types for the Admin API.
//!
//! Each struct is the parameter list of one or more operations. Required
//! inputs are plain fields; `None` means "do not send". Responses are not
//! modelled here: operations return the server's JSON payload untouched.

use serde::{Deserialize, Serialize};

use crate::params::presence_flag;

// ─────────────────────────────────────────────────────────────────────────────
// Enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// User status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Bypass,
    Disabled,
    /// Set by the service only; sending it is rejected by the server.
    #[serde(rename = "locked out")]
    LockedOut,
}

/// Hardware token type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    /// HOTP, 6 digits.
    #[serde(rename = "h6")]
    Hotp6,
    /// HOTP, 8 digits.
    #[serde(rename = "h8")]
    Hotp8,
    /// YubiKey AES.
    #[serde(rename = "yk")]
    Yubikey,
}

/// What an integration does with users who are not enrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollPolicy {
    Enroll,
    Allow,
    Deny,
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters for creating a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewUser {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,
    /// Defaults to active on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewUser {
    /// A user with only a username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }
}

/// Changes to an existing user. At least one field must be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Bypass code generation options.
#[derive(Debug, Clone, Serialize)]
pub struct BypassCodes {
    /// Number of codes to generate.
    pub count: u32,
    /// Seconds until the codes expire; 0 means never.
    pub valid_secs: u64,
}

impl Default for BypassCodes {
    fn default() -> Self {
        Self {
            count: 10,
            valid_secs: 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Phones
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters for creating a phone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewPhone {
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Phone type, e.g. `mobile` or `landline`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<String>,
    /// Platform, e.g. `apple ios` or `google android`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Seconds to wait after the call is answered before dialing the extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predelay: Option<u32>,
    /// Seconds to wait after dialing the extension before the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postdelay: Option<u32>,
}

impl NewPhone {
    /// A phone with only a number.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Default::default()
        }
    }
}

/// Options for an SMS activation message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SmsActivation {
    /// Seconds the activation code stays valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_secs: Option<u64>,
    /// Also send an installation message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_msg: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PhoneLookup<'a> {
    pub number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<&'a str>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokens
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct TokenLookup<'a> {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub serial: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewToken<'a> {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub serial: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aes_key: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenResync<'a> {
    pub code1: &'a str,
    pub code2: &'a str,
    pub code3: &'a str,
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings and info
// ─────────────────────────────────────────────────────────────────────────────

/// Changes to account settings. At least one field must be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lockout_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_user_expiration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_batch: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_expiration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keypress_confirm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keypress_fraud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_id: Option<String>,
}

/// Unix timestamp bounds for usage reports.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TimeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mintime: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxtime: Option<u64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LogQuery {
    pub mintime: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Integrations
// ─────────────────────────────────────────────────────────────────────────────

/// Admin API permissions granted to an integration.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AdminApiPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adminapi_admins: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adminapi_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adminapi_integrations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adminapi_read_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adminapi_read_resource: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adminapi_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adminapi_write_resource: Option<bool>,
}

/// Parameters for creating an integration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewIntegration {
    pub name: String,
    /// Integration type, e.g. `adminapi` or `websdk`.
    #[serde(rename = "type")]
    pub integration_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_style: Option<String>,
    /// Voice greeting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enroll_policy: Option<EnrollPolicy>,
    #[serde(flatten)]
    pub permissions: AdminApiPermissions,
}

impl NewIntegration {
    /// An integration with only a name and type.
    pub fn new(name: impl Into<String>, integration_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            integration_type: integration_type.into(),
            ..Default::default()
        }
    }
}

/// Changes to an integration. At least one field must be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enroll_policy: Option<EnrollPolicy>,
    #[serde(flatten)]
    pub permissions: AdminApiPermissions,
    /// Generate a new secret key. Any `Some` value triggers the reset,
    /// including `Some(false)`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "presence_flag"
    )]
    pub reset_secret_key: Option<bool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Administrators
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters for creating an administrator.
#[derive(Debug, Clone, Serialize)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Changes to an administrator. At least one field must be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Parameters for an administrator activation link.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminActivation {
    pub email: String,
    /// Email the link to the new administrator.
    pub send_email: bool,
    /// Days the link stays valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_days: Option<u32>,
}

impl AdminActivation {
    /// An activation for `email` that is not emailed.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Single-field bodies
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct UsernameQuery<'a> {
    pub username: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PhoneLink<'a> {
    pub phone_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenLink<'a> {
    pub token_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LogoUpload {
    pub logo: String,
}
