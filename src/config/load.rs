use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::schema::Settings;
use crate::error::{Error, Result};

const CONFIG_PATH_VAR: &str = "INFINIPLAY_CONFIG_PATH";
const ENV_PREFIX: &str = "INFINIPLAY";

impl Settings {
    /// Load from the resolved config file, then apply `INFINIPLAY__*` overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load from `path` (missing file is fine), then apply `INFINIPLAY__*` overrides.
    ///
    /// Nested keys use a double underscore: `INFINIPLAY__AUTOPLAY__MIN_QUEUE_DEPTH=3`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }
        let cfg = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(cfg.try_deserialize()?)
    }

    /// Reject settings the monitor cannot run with.
    pub fn validate(&self) -> Result<()> {
        let autoplay = &self.autoplay;
        if autoplay.min_queue_depth == 0 {
            return Err(invalid("autoplay.min_queue_depth must be >= 1"));
        }
        if autoplay.tick_interval_ms == 0 {
            return Err(invalid("autoplay.tick_interval_ms must be >= 1"));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn invalid(msg: &str) -> Error {
    Error::InvalidConfig(msg.to_string())
}

/// `INFINIPLAY_CONFIG_PATH` if set, else [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    config_path_with(|key| env::var_os(key))
}

/// `$XDG_CONFIG_HOME/infiniplay/config.toml`, or under `~/.config` without XDG.
pub fn default_config_path() -> Option<PathBuf> {
    default_path_with(|key| env::var_os(key))
}

pub(super) fn config_path_with(var: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    var(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(|| default_path_with(var))
}

pub(super) fn default_path_with(var: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| var("HOME").map(|home| Path::new(&home).join(".config")))
        .map(|dir| dir.join("infiniplay").join("config.toml"))
}
