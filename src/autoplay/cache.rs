use std::sync::{Arc, RwLock};

/// Snapshot of every known track URI, swapped in whole after a library walk.
///
/// Readers get a cheap `Arc` clone and never see a partially built list.
#[derive(Debug, Default)]
pub struct TrackCache {
    tracks: RwLock<Option<Arc<[String]>>>,
}

impl TrackCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, tracks: Vec<String>) {
        let tracks: Arc<[String]> = tracks.into();
        match self.tracks.write() {
            Ok(mut slot) => *slot = Some(tracks),
            Err(poisoned) => *poisoned.into_inner() = Some(tracks),
        }
    }

    /// The current snapshot, `None` until the first walk completed.
    pub fn snapshot(&self) -> Option<Arc<[String]>> {
        match self.tracks.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> Option<usize> {
        self.snapshot().map(|t| t.len())
    }
}
