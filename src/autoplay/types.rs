//! Small types shared by the monitor and its tick thread.

/// Result of one top-up pass over the tracklist.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    /// The queue reached the minimum depth (or the monitor stopped).
    Filled { added: usize },
    /// No candidate was found but the queue still has entries; left as-is.
    Stalled { added: usize },
    /// No candidate was found and the queue is empty; retried next tick.
    Aborted,
    /// Another thread is already topping up.
    Busy,
}

impl FillOutcome {
    /// Number of entries appended by this pass.
    pub fn added(&self) -> usize {
        match self {
            FillOutcome::Filled { added } | FillOutcome::Stalled { added } => *added,
            FillOutcome::Aborted | FillOutcome::Busy => 0,
        }
    }
}

#[derive(Debug)]
pub(super) enum TickCmd {
    /// Run a check right away instead of waiting for the next tick.
    Check,
    /// Leave the tick loop.
    Stop,
}
