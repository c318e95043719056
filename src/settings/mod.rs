//! Persisted configuration.
//!
//! - [`config`]: JSON file format and location
//! - [`store`]: `Settings`, the cached store that publishes change events

pub mod config;
pub mod store;

pub use config::default_config_path;
pub use store::Settings;
