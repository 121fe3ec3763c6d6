//! Shared primitives for the payshield workspace: environment-backed
//! configuration, the durable identity store, and geolocation types.

pub mod app_config;
pub mod config;
pub mod identity;
pub mod location;

pub use app_config::AppConfig;
pub use config::{load_config, load_config_from_env, ConfigError};
pub use identity::{
    resolve_device_id, resolve_user_id, FileStore, IdentityStore, MemoryStore, DEVICE_ID_KEY,
    USER_ID_KEY,
};
pub use location::{unsupported_fix, Coordinates, LocationError};
