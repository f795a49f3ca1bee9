use crate::error::Result;

use super::model::{PlaybackState, QueueEntry};

/// Event callbacks the host dispatches to registered frontends.
///
/// Callbacks run on the host's event thread; they must not block for long.
pub trait CoreListener: Send + Sync {
    /// `entry` finished playing.
    fn on_playback_ended(&self, _entry: &QueueEntry) {}

    fn on_playback_state_changed(&self, _old: PlaybackState, _new: PlaybackState) {}
}

/// Lifecycle hooks of a host frontend.
pub trait Frontend: CoreListener {
    fn on_start(&self) -> Result<()>;
    fn on_stop(&self);
}
