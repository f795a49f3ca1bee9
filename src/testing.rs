//! In-memory host used by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::host::{
    CatalogItem, Core, EntryId, Library, Playback, PlaybackState, QueueEntry, Tracklist,
    TracklistOptions,
};

#[derive(Default)]
pub struct FakeLibrary {
    tree: HashMap<Option<String>, Vec<CatalogItem>>,
    pub browsed: Mutex<Vec<Option<String>>>,
    fail_on: Option<Option<String>>,
}

impl FakeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, uri: Option<&str>, items: Vec<CatalogItem>) -> Self {
        self.tree.insert(uri.map(str::to_string), items);
        self
    }

    pub fn failing_on(mut self, uri: Option<&str>) -> Self {
        self.fail_on = Some(uri.map(str::to_string));
        self
    }

    pub fn browse_count(&self, uri: Option<&str>) -> usize {
        let key = uri.map(str::to_string);
        self.browsed
            .lock()
            .unwrap()
            .iter()
            .filter(|u| **u == key)
            .count()
    }

    pub fn total_browses(&self) -> usize {
        self.browsed.lock().unwrap().len()
    }
}

impl Library for FakeLibrary {
    fn browse(&self, uri: Option<&str>) -> Result<Vec<CatalogItem>> {
        let key = uri.map(str::to_string);
        self.browsed.lock().unwrap().push(key.clone());
        if self.fail_on.as_ref() == Some(&key) {
            return Err(Error::browse(uri, "injected failure"));
        }
        Ok(self.tree.get(&key).cloned().unwrap_or_default())
    }
}

type AddHook = Box<dyn Fn() + Send + Sync>;

#[derive(Default)]
pub struct FakeTracklist {
    pub entries: Mutex<Vec<QueueEntry>>,
    pub added: Mutex<Vec<String>>,
    pub removed: Mutex<Vec<EntryId>>,
    next_id: AtomicU64,
    pub fail_add: AtomicBool,
    pub length_calls: AtomicUsize,
    on_add: Mutex<Option<AddHook>>,
}

impl FakeTracklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, uris: &[&str]) {
        for uri in uris {
            let _ = self.push(uri);
        }
    }

    /// Run `hook` from inside every `add`, after the entry was appended.
    pub fn set_on_add(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.on_add.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn uris(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.uri.clone())
            .collect()
    }

    fn push(&self, uri: &str) -> QueueEntry {
        let entry = QueueEntry {
            id: EntryId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            uri: uri.to_string(),
        };
        self.entries.lock().unwrap().push(entry.clone());
        entry
    }
}

impl Tracklist for FakeTracklist {
    fn length(&self) -> Result<usize> {
        self.length_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().len())
    }

    fn add(&self, uri: &str) -> Result<QueueEntry> {
        if self.fail_add.load(Ordering::SeqCst) {
            return Err(Error::Tracklist(format!("cannot add {uri}")));
        }
        let entry = self.push(uri);
        self.added.lock().unwrap().push(uri.to_string());
        if let Some(hook) = self.on_add.lock().unwrap().as_ref() {
            hook();
        }
        Ok(entry)
    }

    fn remove(&self, id: EntryId) -> Result<()> {
        self.entries.lock().unwrap().retain(|e| e.id != id);
        self.removed.lock().unwrap().push(id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakePlayback {
    pub state: Mutex<PlaybackState>,
    pub plays: AtomicUsize,
    pub configured: Mutex<Option<TracklistOptions>>,
    pub fail_state: AtomicBool,
    pub state_calls: AtomicUsize,
}

impl FakePlayback {
    pub fn new(state: PlaybackState) -> Self {
        Self {
            state: Mutex::new(state),
            ..Self::default()
        }
    }

    pub fn set_state(&self, state: PlaybackState) {
        *self.state.lock().unwrap() = state;
    }

    pub fn play_count(&self) -> usize {
        self.plays.load(Ordering::SeqCst)
    }
}

impl Playback for FakePlayback {
    fn state(&self) -> Result<PlaybackState> {
        self.state_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_state.load(Ordering::SeqCst) {
            return Err(Error::Playback("state unavailable".into()));
        }
        Ok(*self.state.lock().unwrap())
    }

    fn play(&self) -> Result<()> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        *self.state.lock().unwrap() = PlaybackState::Playing;
        Ok(())
    }

    fn configure(&self, options: TracklistOptions) -> Result<()> {
        *self.configured.lock().unwrap() = Some(options);
        Ok(())
    }
}

pub struct FakeHost {
    pub library: Arc<FakeLibrary>,
    pub tracklist: Arc<FakeTracklist>,
    pub playback: Arc<FakePlayback>,
}

impl FakeHost {
    pub fn new(library: FakeLibrary) -> Self {
        Self {
            library: Arc::new(library),
            tracklist: Arc::new(FakeTracklist::new()),
            playback: Arc::new(FakePlayback::new(PlaybackState::Stopped)),
        }
    }

    pub fn core(&self) -> Core {
        Core::new(
            self.library.clone(),
            self.tracklist.clone(),
            self.playback.clone(),
        )
    }
}
