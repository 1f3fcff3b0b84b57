use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use kotoba_config::Config;
use serde::{Deserialize, Serialize};

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Load the profile at `path`, or build the config from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No profile given, reading config from environment");
        return Ok(Config::new());
    };

    let file = File::open(path).with_context(|| format!("Cannot open profile {}", path.display()))?;
    let profile: Profile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid profile {}", path.display()))?;

    tracing::info!("Loaded profile '{}' from {}", profile.name, path.display());
    Ok(profile.value)
}

/// Write `config` as a named profile, creating parent folders as needed
pub fn save_profile(path: &Path, name: &str, config: &Config) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Saved profile '{name}' to {}", path.display());
    Ok(())
}
