use std::sync::Arc;

use crate::error::Result;

use super::model::{CatalogItem, EntryId, PlaybackState, QueueEntry, TracklistOptions};

/// Library browsing contract.
///
/// `uri = None` browses the library root. Implementations hand back an owned
/// `Vec`; callers never hold on to host storage.
pub trait Library: Send + Sync {
    fn browse(&self, uri: Option<&str>) -> Result<Vec<CatalogItem>>;
}

/// The shared play queue.
pub trait Tracklist: Send + Sync {
    fn length(&self) -> Result<usize>;
    /// Append `uri` at the end of the queue.
    fn add(&self, uri: &str) -> Result<QueueEntry>;
    fn remove(&self, id: EntryId) -> Result<()>;
}

pub trait Playback: Send + Sync {
    fn state(&self) -> Result<PlaybackState>;
    /// Start playing from the current (or first) queue entry.
    fn play(&self) -> Result<()>;
    fn configure(&self, options: TracklistOptions) -> Result<()>;
}

/// Handles to the host services, cheap to clone across threads.
#[derive(Clone)]
pub struct Core {
    pub library: Arc<dyn Library>,
    pub tracklist: Arc<dyn Tracklist>,
    pub playback: Arc<dyn Playback>,
}

impl Core {
    pub fn new(
        library: Arc<dyn Library>,
        tracklist: Arc<dyn Tracklist>,
        playback: Arc<dyn Playback>,
    ) -> Self {
        Self {
            library,
            tracklist,
            playback,
        }
    }
}
