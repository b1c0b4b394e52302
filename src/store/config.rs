// ABOUTME: Store connection configuration - address, database, credentials.
// ABOUTME: Loadable from environment variables; Debug output redacts the password.

use crate::error::StoreError;

/// Environment variable holding the store address.
pub const ENV_ADDRESS: &str = "BOOKGATE_STORE_ADDRESS";
/// Environment variable holding the database name.
pub const ENV_DATABASE: &str = "BOOKGATE_STORE_DATABASE";
/// Environment variable holding the store user.
pub const ENV_USER: &str = "BOOKGATE_STORE_USER";
/// Environment variable holding the store password.
pub const ENV_PASSWORD: &str = "BOOKGATE_STORE_PASSWORD";

/// Connection settings for a backing store.
#[derive(Clone)]
pub struct StoreConfig {
    /// Base address of the store, e.g. `http://localhost:3306`.
    pub address: String,

    /// Database to write bookings into.
    pub database: String,

    /// User to authenticate as.
    pub user: String,

    /// Password for the user. May be empty.
    pub password: String,
}

impl StoreConfig {
    /// Create a config from explicit values.
    pub fn new(
        address: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            database: database.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Load the config from `BOOKGATE_STORE_*` environment variables.
    ///
    /// The address is required. Database, user, and password fall back to
    /// `workshopdb`, `root`, and an empty password.
    pub fn from_env() -> Result<Self, StoreError> {
        let address = std::env::var(ENV_ADDRESS).map_err(|_| {
            StoreError::Configuration(format!("{} environment variable not set", ENV_ADDRESS))
        })?;

        Ok(Self {
            address,
            database: std::env::var(ENV_DATABASE).unwrap_or_else(|_| "workshopdb".to_string()),
            user: std::env::var(ENV_USER).unwrap_or_else(|_| "root".to_string()),
            password: std::env::var(ENV_PASSWORD).unwrap_or_default(),
        })
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("address", &self.address)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
