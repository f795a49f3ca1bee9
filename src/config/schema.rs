use serde::{Deserialize, Serialize};

/// Top-level extension settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/infiniplay/config.toml` or `~/.config/infiniplay/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `INFINIPLAY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub autoplay: AutoplaySettings,
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AutoplaySettings {
    /// Keep at least this many entries in the host tracklist.
    pub min_queue_depth: usize,
    /// Interval between two monitor ticks (milliseconds).
    pub tick_interval_ms: u64,
    /// Walk the whole library once at startup and pick from that snapshot.
    /// When disabled every pick browses the live catalog.
    pub warm_cache: bool,
}

impl Default for AutoplaySettings {
    fn default() -> Self {
        Self {
            min_queue_depth: 2,
            tick_interval_ms: 1000,
            warm_cache: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// URI schemes to consider (without the trailing `:`).
    /// An empty list accepts every item the host returns.
    pub uri_schemes: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            uri_schemes: vec!["local".into()],
        }
    }
}

impl LibrarySettings {
    /// Whether `uri` belongs to one of the configured schemes.
    pub fn accepts(&self, uri: &str) -> bool {
        if self.uri_schemes.is_empty() {
            return true;
        }
        let Some((scheme, _)) = uri.split_once(':') else {
            return false;
        };
        self.uri_schemes
            .iter()
            .map(|s| s.trim().trim_end_matches(':'))
            .any(|s| s.eq_ignore_ascii_case(scheme))
    }
}

/// Tracklist modes applied to the host when the monitor starts.
///
/// Consumption is left off on purpose: the monitor removes finished entries itself.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    pub random: bool,
    pub repeat: bool,
    pub single: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
