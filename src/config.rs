//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bincomp/bincomp.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `BINCOMP_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, IoResultExt};

/// Unified configuration for bincomp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Render the steps area after each result (default: true)
    pub show_steps: bool,
    /// Group displayed bits in blocks of this size, 0 disables (default: 0)
    pub group_size: usize,
    /// Prompt for interactive mode
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_steps: true,
            group_size: 0,
            prompt: "binary> ".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub show_steps: Option<bool>,
    pub group_size: Option<usize>,
    pub prompt: Option<String>,
}

/// Get the XDG config directory for bincomp.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bincomp").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bincomp.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            show_steps: overlay.show_steps.unwrap_or(self.show_steps),
            group_size: overlay.group_size.unwrap_or(self.group_size),
            prompt: overlay
                .prompt
                .clone()
                .unwrap_or_else(|| self.prompt.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `extra` - Optional config file given on the command line; must exist
    pub fn load(extra: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), extra)
    }

    /// Load settings from explicit file locations.
    ///
    /// A missing global file is skipped, a missing `extra` file is an error.
    pub fn load_from(
        global: Option<&Path>,
        extra: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(extra_path) = extra {
            if !extra_path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", extra_path.display()),
                });
            }
            debug!("load: extra config {}", extra_path.display());
            current = current.merge_with(&load_raw_settings(extra_path)?);
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current)
    }

    /// Apply BINCOMP_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BINCOMP")
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        match config.get_bool("show_steps") {
            Ok(val) => settings.show_steps = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_int("group_size") {
            Ok(val) => {
                settings.group_size = usize::try_from(val).map_err(|_| ApplicationError::Config {
                    message: format!("group_size must not be negative: {val}"),
                })?;
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_string("prompt") {
            Ok(val) => settings.prompt = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Write the config template to `path`, creating parent directories.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn write_template(path: &Path, force: bool) -> Result<(), ApplicationError> {
        if path.exists() && !force {
            return Err(ApplicationError::Config {
                message: format!("config already exists: {} (use --force)", path.display()),
            });
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_path_context("create config dir", parent)?;
        }
        std::fs::write(path, Self::template()).with_path_context("write config", path)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bincomp configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bincomp/bincomp.toml
#   Extra:  file passed with --config
#   Env:    BINCOMP_* environment variables (e.g. BINCOMP_SHOW_STEPS=false)

# Print the intermediate steps after each result
# show_steps = true

# Group bits for display, counted from the least-significant end (0 = off)
# group_size = 4

# Prompt for interactive mode
# prompt = "binary> "
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
