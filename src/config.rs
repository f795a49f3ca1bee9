//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the autoplay monitor and
//! helpers to load them from disk and the environment.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
