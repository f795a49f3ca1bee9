//! Autoplay monitor: keeps the host tracklist topped up with random tracks
//! and restarts playback whenever the host reports it stopped.
//!
//! `Monitor` is the handle the host talks to. The work itself lives in a
//! shared state object used by three threads: the tick loop, the one-shot
//! library walk and the host's event thread.

mod cache;
mod monitor;
mod thread;
mod types;

pub use cache::TrackCache;
pub use monitor::Monitor;
pub use types::FillOutcome;
