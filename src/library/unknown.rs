use std::collections::HashSet;
use std::sync::Mutex;

use crate::host::ItemKind;

/// Kinds already reported, so each unknown kind is warned about once.
#[derive(Debug, Default)]
pub struct UnknownKinds {
    seen: Mutex<HashSet<String>>,
}

impl UnknownKinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `kind`; returns `true` the first time it is seen.
    pub fn note(&self, kind: &ItemKind) -> bool {
        let mut seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());
        seen.insert(kind.label().to_string())
    }

    /// Warn about `kind` unless it was already reported.
    pub(crate) fn warn_once(&self, kind: &ItemKind, uri: &str) {
        if self.note(kind) {
            tracing::warn!(kind = %kind, uri, "unknown library item kind, skipping");
        }
    }

    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
