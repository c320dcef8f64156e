//! Configuration schema types for Parley.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the service ships with.

mod provider;
mod server;
mod sessions;
mod system;

pub use provider::*;
pub use server::*;
pub use sessions::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Parley.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ParleyConfig {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub sessions: SessionsConfig,
    pub logging: LoggingConfig,
}
