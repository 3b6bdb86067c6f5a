use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u64 = 1;

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct JotConfig {
    /// Origin of the notes backend, e.g. `http://localhost:3000`.
    pub api_base_url: String,
    pub debug_logging: bool,
}

impl Default for JotConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            debug_logging: false,
        }
    }
}
