//! The Admin API operation catalogue.
//!
//! Each operation is a constant describing its verb and path template. The
//! resource handles in [`crate::api`] pair one of these with a parameter
//! struct and hand both to the client.

use crate::path;
use crate::transport::Method;

/// Static description of one Admin API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Name used in logs.
    pub name: &'static str,
    /// HTTP verb.
    pub method: Method,
    /// Path template relative to `/admin/v1`, with `{id}` placeholders.
    pub template: &'static str,
    /// An empty parameter set is rejected before sending.
    pub requires_params: bool,
    /// The response may be a raw image instead of a JSON envelope.
    pub may_return_binary: bool,
}

impl Operation {
    const fn new(name: &'static str, method: Method, template: &'static str) -> Self {
        Self {
            name,
            method,
            template,
            requires_params: false,
            may_return_binary: false,
        }
    }

    const fn get(name: &'static str, template: &'static str) -> Self {
        Self::new(name, Method::Get, template)
    }

    const fn post(name: &'static str, template: &'static str) -> Self {
        Self::new(name, Method::Post, template)
    }

    const fn delete(name: &'static str, template: &'static str) -> Self {
        Self::new(name, Method::Delete, template)
    }

    const fn requiring_params(mut self) -> Self {
        self.requires_params = true;
        self
    }

    const fn binary(mut self) -> Self {
        self.may_return_binary = true;
        self
    }

    /// Render the full, encoded request path.
    pub fn path(&self, ids: &[&str]) -> String {
        path::render(self.template, ids)
    }
}

// Logs
pub const GET_ADMINISTRATOR_LOG: Operation =
    Operation::get("get_administrator_log", "/logs/administrator");
pub const GET_AUTHENTICATION_LOG: Operation =
    Operation::get("get_authentication_log", "/logs/authentication");
pub const GET_TELEPHONY_LOG: Operation = Operation::get("get_telephony_log", "/logs/telephony");

// Users
pub const GET_USERS: Operation = Operation::get("get_users", "/users");
pub const GET_USER: Operation = Operation::get("get_user", "/users/{user_id}");
pub const ADD_USER: Operation = Operation::post("add_user", "/users");
pub const UPDATE_USER: Operation =
    Operation::post("update_user", "/users/{user_id}").requiring_params();
pub const DELETE_USER: Operation = Operation::delete("delete_user", "/users/{user_id}");
pub const GET_USER_BYPASS_CODES: Operation =
    Operation::post("get_user_bypass_codes", "/users/{user_id}/bypass_codes");
pub const GET_USER_PHONES: Operation = Operation::get("get_user_phones", "/users/{user_id}/phones");
pub const ADD_USER_PHONE: Operation = Operation::post("add_user_phone", "/users/{user_id}/phones");
pub const DELETE_USER_PHONE: Operation =
    Operation::delete("delete_user_phone", "/users/{user_id}/phones/{phone_id}");
pub const GET_USER_TOKENS: Operation = Operation::get("get_user_tokens", "/users/{user_id}/tokens");
pub const ADD_USER_TOKEN: Operation = Operation::post("add_user_token", "/users/{user_id}/tokens");
pub const DELETE_USER_TOKEN: Operation =
    Operation::delete("delete_user_token", "/users/{user_id}/tokens/{token_id}");

// Phones
pub const GET_PHONES: Operation = Operation::get("get_phones", "/phones");
pub const GET_PHONE: Operation = Operation::get("get_phone", "/phones/{phone_id}");
pub const ADD_PHONE: Operation = Operation::post("add_phone", "/phones");
pub const DELETE_PHONE: Operation = Operation::delete("delete_phone", "/phones/{phone_id}");
pub const SEND_SMS_ACTIVATION: Operation = Operation::post(
    "send_sms_activation_to_phone",
    "/phones/{phone_id}/send_sms_activation",
);

// Hardware tokens
pub const GET_TOKENS: Operation = Operation::get("get_tokens", "/tokens");
pub const GET_TOKEN: Operation = Operation::get("get_token", "/tokens/{token_id}");
pub const ADD_TOKEN: Operation = Operation::post("add_token", "/tokens");
pub const DELETE_TOKEN: Operation = Operation::delete("delete_token", "/tokens/{token_id}");
pub const RESYNC_TOKEN: Operation = Operation::post("resync_hotp_token", "/tokens/{token_id}/resync");

// Settings
pub const GET_SETTINGS: Operation = Operation::get("get_settings", "/settings");
pub const UPDATE_SETTINGS: Operation =
    Operation::post("update_settings", "/settings").requiring_params();

// Info
pub const GET_INFO_SUMMARY: Operation = Operation::get("get_info_summary", "/info/summary");
pub const GET_TELEPHONY_CREDITS_USED: Operation = Operation::get(
    "get_info_telephony_credits_used",
    "/info/telephony_credits_used",
);
pub const GET_AUTHENTICATION_ATTEMPTS: Operation = Operation::get(
    "get_authentication_attempts",
    "/info/authentication_attempts",
);
pub const GET_USER_AUTHENTICATION_ATTEMPTS: Operation = Operation::get(
    "get_user_authentication_attempts",
    "/info/user_authentication_attempts",
);

// Integrations
pub const GET_INTEGRATIONS: Operation = Operation::get("get_integrations", "/integrations");
pub const GET_INTEGRATION: Operation =
    Operation::get("get_integration", "/integrations/{integration_key}");
pub const CREATE_INTEGRATION: Operation = Operation::post("create_integration", "/integrations");
pub const UPDATE_INTEGRATION: Operation =
    Operation::post("update_integration", "/integrations/{integration_key}").requiring_params();
pub const DELETE_INTEGRATION: Operation =
    Operation::delete("delete_integration", "/integrations/{integration_key}");

// Administrators
pub const GET_ADMINS: Operation = Operation::get("get_admins", "/admins");
pub const GET_ADMIN: Operation = Operation::get("get_admin", "/admins/{admin_id}");
pub const ADD_ADMIN: Operation = Operation::post("add_admin", "/admins");
pub const UPDATE_ADMIN: Operation =
    Operation::post("update_admin", "/admins/{admin_id}").requiring_params();
pub const DELETE_ADMIN: Operation = Operation::delete("delete_admin", "/admins/{admin_id}");
pub const RESET_ADMIN: Operation = Operation::post("reset_admin", "/admins/{admin_id}/reset");
pub const ACTIVATE_ADMIN: Operation = Operation::post("activate_admin", "/admins/activate");

// Logo
pub const GET_LOGO: Operation = Operation::get("get_logo", "/logo").binary();
pub const UPDATE_LOGO: Operation = Operation::post("update_logo", "/logo");
pub const DELETE_LOGO: Operation = Operation::delete("delete_logo", "/logo");
