use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::session::SessionConfig;
use self::ui::UiConfig;

pub mod network;
pub mod session;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub network: NetworkConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Build a config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            session: SessionConfig::new(),
            network: NetworkConfig::new(),
            ui: UiConfig::default(),
        }
    }
}
