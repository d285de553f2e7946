//! Loading of the page configuration
//!
//! Desktop reads JSON from the file named by `LANDING_CONFIG`, falling back
//! to `landing.json` in the per-user config directory. The browser build has
//! no file system and always uses the defaults.

use landing_domain::LandingConfig;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "LANDING_CONFIG";

#[cfg(not(target_arch = "wasm32"))]
pub use native::{default_config_path, load_from_path, resolve_config_path};

/// Load the configuration, logging and falling back to defaults on any problem
pub fn load_config() -> LandingConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let explicit = std::env::var(CONFIG_ENV).ok();
        let Some(path) = resolve_config_path(explicit.as_deref()) else {
            tracing::debug!("No config directory available, using defaults");
            return LandingConfig::default();
        };

        match load_from_path(&path) {
            Ok(Some(config)) => {
                tracing::info!(path = %path.display(), "Loaded landing config");
                config
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                LandingConfig::default()
            }
            Err(e) => {
                let reason = format!("{e:#}");
                tracing::warn!(path = %path.display(), error = %reason, "Ignoring invalid config");
                LandingConfig::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        LandingConfig::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Context;
    use directories::ProjectDirs;
    use landing_domain::LandingConfig;
    use std::path::{Path, PathBuf};

    /// Per-user location of `landing.json`
    ///
    /// - Linux: ~/.config/landing/landing.json
    /// - macOS: ~/Library/Application Support/io.landing.landing/landing.json
    /// - Windows: C:\Users\<User>\AppData\Roaming\landing\landing\config\landing.json
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "landing", "landing")
            .map(|dirs| dirs.config_dir().join("landing.json"))
    }

    /// The explicit path wins when set and non-blank
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit.map(str::trim) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => default_config_path(),
        }
    }

    /// `Ok(None)` when the file does not exist
    pub fn load_from_path(path: &Path) -> anyhow::Result<Option<LandingConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = LandingConfig::from_json(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(config))
    }
}
