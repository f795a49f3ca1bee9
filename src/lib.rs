//! Keeps a media server's tracklist playing.
//!
//! The host links this crate as a frontend extension: it builds a
//! [`Monitor`] through [`Extension::frontend`], calls its lifecycle hooks and
//! forwards playback events to it. The monitor walks the library once,
//! keeps the tracklist at a minimum depth with random tracks and restarts
//! playback whenever it stops.

pub mod autoplay;
pub mod config;
pub mod error;
pub mod extension;
pub mod host;
pub mod library;
pub mod logging;

#[cfg(test)]
mod testing;

pub use autoplay::{FillOutcome, Monitor};
pub use config::Settings;
pub use error::{Error, Result};
pub use extension::Extension;
pub use host::{Core, CoreListener, Frontend};
