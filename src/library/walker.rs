use std::collections::HashSet;
use std::sync::Arc;

use tracing::Span;

use crate::config::LibrarySettings;
use crate::error::Result;
use crate::host::{CatalogItem, ItemClass, Library};

use super::unknown::UnknownKinds;

/// Depth-first walk of the host library producing every reachable track URI.
pub struct Walker {
    library: Arc<dyn Library>,
    settings: LibrarySettings,
    span: Span,
}

impl Walker {
    pub fn new(library: Arc<dyn Library>, settings: &LibrarySettings) -> Self {
        Self {
            library,
            settings: settings.clone(),
            span: tracing::info_span!("walker"),
        }
    }

    /// Log under `span` instead of the default `walker` span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Collect the URIs of all tracks below `root` (`None` = library root).
    ///
    /// Each URI is browsed at most once, so shared or cyclic links are fine.
    /// The order of the result follows the LIFO worklist and carries no meaning.
    /// A failing browse aborts the whole walk.
    pub fn traverse(&self, root: Option<&str>) -> Result<Vec<String>> {
        let _entered = self.span.enter();
        tracing::info!(root = root.unwrap_or("<root>"), "walking library");

        let unknown = UnknownKinds::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut tracks: Vec<String> = Vec::new();
        let mut work: Vec<CatalogItem> = self.library.browse(root)?;

        while let Some(item) = work.pop() {
            if visited.contains(&item.uri) {
                continue;
            }
            if !self.settings.accepts(&item.uri) {
                continue;
            }
            visited.insert(item.uri.clone());

            match item.kind.class() {
                ItemClass::Folder => {
                    tracing::debug!(uri = %item.uri, kind = %item.kind, "browsing");
                    work.extend(self.library.browse(Some(&item.uri))?);
                }
                ItemClass::Track => tracks.push(item.uri),
                ItemClass::Unknown => unknown.warn_once(&item.kind, &item.uri),
            }
        }

        tracing::info!(tracks = tracks.len(), "library walk finished");
        Ok(tracks)
    }
}
