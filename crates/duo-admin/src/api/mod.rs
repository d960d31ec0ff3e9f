//! Resource handles, one per Admin API area.

mod admins;
mod info;
mod integrations;
mod logo;
mod logs;
mod phones;
mod settings;
mod tokens;
mod users;

pub use admins::AdminsApi;
pub use info::InfoApi;
pub use integrations::IntegrationsApi;
pub use logo::LogoApi;
pub use logs::LogsApi;
pub use phones::PhonesApi;
pub use settings::SettingsApi;
pub use tokens::TokensApi;
pub use users::UsersApi;
