use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};

use super::monitor::Shared;
use super::types::TickCmd;

/// Run `Shared::tick` every `tick_interval` until told to stop.
///
/// A `Check` command runs a tick right away. Dropping the sender also ends the loop.
pub(super) fn spawn_tick_thread(
    shared: Arc<Shared>,
    rx: Receiver<TickCmd>,
) -> io::Result<JoinHandle<()>> {
    let interval = shared.tick_interval();
    thread::Builder::new()
        .name("infiniplay-tick".to_string())
        .spawn(move || {
            let _entered = shared.span.clone().entered();
            tracing::debug!(interval_ms = interval.as_millis() as u64, "tick loop running");

            loop {
                match rx.recv_timeout(interval) {
                    Ok(TickCmd::Check) => shared.tick(),
                    Ok(TickCmd::Stop) => break,
                    Err(RecvTimeoutError::Timeout) => {
                        if !shared.is_running() {
                            break;
                        }
                        shared.tick();
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            tracing::debug!("tick loop exited");
        })
}

/// One-shot library walk filling the track cache.
///
/// A failed walk leaves the cache cold; picks keep using the live catalog.
pub(super) fn spawn_walk_thread(shared: Arc<Shared>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("infiniplay-walk".to_string())
        .spawn(move || {
            let _entered = shared.span.clone().entered();
            match shared.warm_cache() {
                Ok(found) => tracing::info!(tracks = found, "track cache ready"),
                Err(e) => tracing::error!(error = %e, "library walk failed, cache stays cold"),
            }
        })
}
