//! Bot run configuration: built-in defaults, optional TOML file, CLI
//! overrides applied by the binaries on top.

use std::path::Path;

use serde::Deserialize;

use crate::harness::models::buildings;
use crate::harness::session::DEFAULT_ENDPOINT;

/// Everything a bot needs to register and drive one run. Defaults reproduce
/// the no-argument behavior: a sandbox run of `tiny_random` on the hosted
/// simulator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Bot name shown on the scoreboard.
    pub bot: String,
    pub building_name: String,
    /// Used for the scoreboard avatar (Gravatar).
    pub email: String,
    /// Each event has its own scoreboard.
    pub event: String,
    /// Sandbox runs are not scored and keep no replay.
    pub sandbox: bool,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot: "dianti-rust-bot".into(),
            building_name: buildings::TINY_RANDOM.into(),
            email: "bob@mail.com".into(),
            event: "secondspace2025".into(),
            sandbox: true,
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_secs: 30,
        }
    }
}

impl BotConfig {
    /// Defaults with a specific scoreboard name; each binary has its own.
    pub fn for_bot(name: &str) -> Self {
        Self {
            bot: name.into(),
            ..Self::default()
        }
    }
}

/// Load a config from a TOML file at the given path. Missing fields fall
/// back to the built-in defaults.
pub fn load_config(path: &Path) -> Result<BotConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Try well-known paths, returning `fallback` if none is found.
pub fn load_default_config(fallback: BotConfig) -> BotConfig {
    let candidates = ["dianti.toml", "../dianti.toml", "/etc/dianti/dianti.toml"];
    for path in &candidates {
        let p = Path::new(path);
        if p.exists() {
            match load_config(p) {
                Ok(config) => {
                    tracing::info!(path = %p.display(), "loaded bot config");
                    return config;
                }
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "failed to load bot config");
                }
            }
        }
    }
    tracing::info!("no dianti.toml found, using built-in defaults");
    fallback
}
