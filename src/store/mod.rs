// ABOUTME: Backing-store boundary - connector traits, configuration, and
// ABOUTME: the HTTP and in-memory backends.

mod config;
mod http;
mod memory;
mod traits;

pub use config::{ENV_ADDRESS, ENV_DATABASE, ENV_PASSWORD, ENV_USER, StoreConfig};
pub use http::HttpStore;
pub use memory::MemoryStore;
pub use traits::{StoreConnection, StoreConnector};

#[cfg(test)]
mod config_test;
