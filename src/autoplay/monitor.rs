use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, TryLockError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::seq::IndexedRandom;
use tracing::Span;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::host::{Core, CoreListener, Frontend, PlaybackState, QueueEntry, TracklistOptions};
use crate::library::{UnknownKinds, Walker, descend};

use super::cache::TrackCache;
use super::thread::{spawn_tick_thread, spawn_walk_thread};
use super::types::{FillOutcome, TickCmd};

/// State shared between the monitor handle, the tick loop, the library walk
/// and host callbacks.
pub(super) struct Shared {
    pub(super) core: Core,
    pub(super) settings: Settings,
    pub(super) running: AtomicBool,
    pub(super) cache: TrackCache,
    /// Held for the whole top-up so two threads never fill at once; a
    /// re-entrant check raised by our own append sees `Busy`.
    fill_lock: Mutex<()>,
    /// Unknown kinds met by the on-demand descent, for the monitor's lifetime.
    unknown: UnknownKinds,
    pub(super) span: Span,
}

impl Shared {
    pub(super) fn new(core: Core, settings: Settings, span: Span) -> Self {
        Self {
            core,
            settings,
            running: AtomicBool::new(false),
            cache: TrackCache::new(),
            fill_lock: Mutex::new(()),
            unknown: UnknownKinds::new(),
            span,
        }
    }

    pub(super) fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub(super) fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.settings.autoplay.tick_interval_ms.max(1))
    }

    /// Append random tracks until the tracklist holds `min_queue_depth` entries.
    pub(super) fn ensure_queue_filled(&self) -> Result<FillOutcome> {
        let _fill = match self.fill_lock.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => return Ok(FillOutcome::Busy),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };

        let min_depth = self.settings.autoplay.min_queue_depth;
        let mut added = 0;

        while self.is_running() {
            let len = self.core.tracklist.length()?;
            if len >= min_depth {
                break;
            }

            let Some(uri) = self.pick_candidate()? else {
                if len == 0 {
                    tracing::warn!("no tracks to shuffle, retrying on next tick");
                    return Ok(FillOutcome::Aborted);
                }
                tracing::debug!(queued = len, "no candidate track, keeping current queue");
                return Ok(FillOutcome::Stalled { added });
            };

            let entry = self.core.tracklist.add(&uri)?;
            tracing::info!(uri = %entry.uri, id = %entry.id, "queued random track");
            added += 1;
        }

        Ok(FillOutcome::Filled { added })
    }

    /// Pick a random track, from the cache when warm, else from the live catalog.
    pub(super) fn pick_candidate(&self) -> Result<Option<String>> {
        let mut rng = rand::rng();
        if let Some(tracks) = self.cache.snapshot() {
            if let Some(uri) = tracks.choose(&mut rng) {
                return Ok(Some(uri.clone()));
            }
        }
        descend(
            self.core.library.as_ref(),
            None,
            &self.settings.library,
            &self.unknown,
            &mut rng,
        )
    }

    /// Issue `play()` when the host is stopped. Paused playback is left alone.
    pub(super) fn resume_if_stopped(&self) -> Result<bool> {
        match self.core.playback.state()? {
            PlaybackState::Stopped => {
                self.core.playback.play()?;
                tracing::info!("playback was stopped, resuming");
                Ok(true)
            }
            PlaybackState::Playing | PlaybackState::Paused => Ok(false),
        }
    }

    /// Top up the queue, then resume playback unless the top-up gave up.
    pub(super) fn check_state(&self) -> Result<()> {
        if !self.is_running() {
            return Ok(());
        }
        match self.ensure_queue_filled()? {
            FillOutcome::Aborted | FillOutcome::Busy => Ok(()),
            FillOutcome::Filled { .. } | FillOutcome::Stalled { .. } => {
                self.resume_if_stopped()?;
                Ok(())
            }
        }
    }

    /// One scheduled check; failures are logged and never escape.
    pub(super) fn tick(&self) {
        if let Err(e) = self.check_state() {
            tracing::error!(error = %e, "autoplay check failed");
        }
    }

    /// Walk the whole library and replace the cache with the result.
    pub(super) fn warm_cache(&self) -> Result<usize> {
        let walker = Walker::new(self.core.library.clone(), &self.settings.library)
            .with_span(tracing::info_span!(parent: &self.span, "walker"));
        let tracks = walker.traverse(None)?;
        let found = tracks.len();
        self.cache.replace(tracks);
        Ok(found)
    }
}

/// Frontend that keeps the music going.
///
/// Construct it with [`Monitor::new`], hand it to the host as a [`Frontend`]
/// and the host's `on_start` / `on_stop` drive the background threads.
pub struct Monitor {
    shared: Arc<Shared>,
    tx: Mutex<Option<Sender<TickCmd>>>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Monitor {
    pub fn new(core: Core, settings: Settings) -> Self {
        Self::with_span(core, settings, tracing::info_span!("infiniplay"))
    }

    /// Like [`Monitor::new`], logging under `span`.
    pub fn with_span(core: Core, settings: Settings, span: Span) -> Self {
        Self {
            shared: Arc::new(Shared::new(core, settings, span)),
            tx: Mutex::new(None),
            join: Mutex::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    /// Number of tracks in the cache, `None` while no walk has completed.
    pub fn cached_tracks(&self) -> Option<usize> {
        self.shared.cache.len()
    }

    /// Start the tick loop and, if enabled, the background library walk.
    ///
    /// The first check runs right away on the tick thread.
    pub fn start(&self) -> Result<()> {
        let _entered = self.shared.span.enter();
        if self.shared.running.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyRunning);
        }
        if let Err(e) = self.launch() {
            self.shared.running.store(false, Ordering::SeqCst);
            return Err(e);
        }
        Ok(())
    }

    fn launch(&self) -> Result<()> {
        let playback = &self.shared.settings.playback;
        self.shared.core.playback.configure(TracklistOptions {
            random: playback.random,
            repeat: playback.repeat,
            single: playback.single,
        })?;

        let (tx, rx) = mpsc::channel::<TickCmd>();
        let handle = spawn_tick_thread(self.shared.clone(), rx)?;
        let _ = tx.send(TickCmd::Check);

        *self.tx.lock().unwrap_or_else(|e| e.into_inner()) = Some(tx);
        *self.join.lock().unwrap_or_else(|e| e.into_inner()) = Some(handle);

        if self.shared.settings.autoplay.warm_cache {
            // The walk is never joined; it finishes on its own even after stop.
            if let Err(e) = spawn_walk_thread(self.shared.clone()) {
                tracing::warn!(error = %e, "could not start library walk, picking from live catalog");
            }
        }

        tracing::info!(
            min_queue_depth = self.shared.settings.autoplay.min_queue_depth,
            "autoplay started"
        );
        Ok(())
    }

    /// Stop the tick loop and wait for it to exit. Safe to call repeatedly.
    pub fn stop(&self) {
        let _entered = self.shared.span.enter();
        let was_running = self.shared.running.swap(false, Ordering::SeqCst);

        let tx = self.tx.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(tx) = tx {
            let _ = tx.send(TickCmd::Stop);
        }
        let handle = self.join.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(handle) = handle {
            if handle.thread().id() != thread::current().id() {
                let _ = handle.join();
            }
        }

        if was_running {
            tracing::info!("autoplay stopped");
        }
    }

    /// Wake the tick loop for an immediate check. Returns `false` when the
    /// monitor is not running.
    pub fn request_check(&self) -> bool {
        let slot = self.tx.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_ref() {
            Some(tx) => tx.send(TickCmd::Check).is_ok(),
            None => false,
        }
    }

    pub fn ensure_queue_filled(&self) -> Result<FillOutcome> {
        let _entered = self.shared.span.enter();
        self.shared.ensure_queue_filled()
    }

    pub fn resume_if_stopped(&self) -> Result<bool> {
        let _entered = self.shared.span.enter();
        self.shared.resume_if_stopped()
    }

    pub fn check_state(&self) -> Result<()> {
        let _entered = self.shared.span.enter();
        self.shared.check_state()
    }

    /// Walk the library on the calling thread and refresh the cache.
    pub fn warm_cache(&self) -> Result<usize> {
        let _entered = self.shared.span.enter();
        self.shared.warm_cache()
    }
}

impl CoreListener for Monitor {
    fn on_playback_ended(&self, entry: &QueueEntry) {
        let _entered = self.shared.span.enter();
        // The tracklist does not consume on its own; drop what was played.
        match self.shared.core.tracklist.remove(entry.id) {
            Ok(()) => tracing::debug!(id = %entry.id, uri = %entry.uri, "removed finished entry"),
            Err(e) => tracing::error!(id = %entry.id, error = %e, "failed to remove finished entry"),
        }
    }

    fn on_playback_state_changed(&self, old: PlaybackState, new: PlaybackState) {
        let _entered = self.shared.span.enter();
        // The check may browse the live catalog; keep it off the host's event thread.
        if !self.request_check() {
            tracing::debug!(?old, ?new, "state change while stopped, ignoring");
        }
    }
}

impl Frontend for Monitor {
    fn on_start(&self) -> Result<()> {
        self.start()
    }

    fn on_stop(&self) {
        self.stop();
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        self.stop();
    }
}
