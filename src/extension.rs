//! Registration surface handed to the host runtime.

use std::sync::Arc;

use crate::autoplay::Monitor;
use crate::config::Settings;
use crate::error::Result;
use crate::host::Core;

pub struct Extension;

impl Extension {
    pub const DIST_NAME: &'static str = "infiniplay";
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Default configuration as a TOML document, for the host to merge or print.
    pub fn default_config() -> Result<String> {
        Settings::default().to_toml()
    }

    /// Load and validate settings, falling back to defaults on any failure.
    ///
    /// Configuration is optional; a bad file must not keep the host from starting.
    pub fn load_settings() -> Settings {
        match Settings::load() {
            Ok(s) => {
                if let Err(e) = s.validate() {
                    tracing::warn!(error = %e, "invalid config, using defaults");
                    Settings::default()
                } else {
                    s
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load config, using defaults");
                Settings::default()
            }
        }
    }

    /// Build the frontend the host registers for lifecycle hooks and events.
    pub fn frontend(core: Core, settings: Settings) -> Arc<Monitor> {
        Arc::new(Monitor::new(core, settings))
    }
}
