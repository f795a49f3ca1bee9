use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::LibrarySettings;
use crate::error::Result;
use crate::host::{ItemClass, Library};

use super::unknown::UnknownKinds;

/// Browse from `root` down a random path and return the first track found.
///
/// Children are shuffled at every level and explored depth-first, so a branch
/// without tracks falls back to its siblings. Returns `Ok(None)` when nothing
/// playable is reachable.
pub fn descend<R: Rng + ?Sized>(
    library: &dyn Library,
    root: Option<&str>,
    settings: &LibrarySettings,
    unknown: &UnknownKinds,
    rng: &mut R,
) -> Result<Option<String>> {
    let mut visited: HashSet<String> = HashSet::new();
    descend_from(library, root, settings, unknown, rng, &mut visited)
}

fn descend_from<R: Rng + ?Sized>(
    library: &dyn Library,
    uri: Option<&str>,
    settings: &LibrarySettings,
    unknown: &UnknownKinds,
    rng: &mut R,
    visited: &mut HashSet<String>,
) -> Result<Option<String>> {
    let mut children = library.browse(uri)?;
    children.shuffle(rng);

    for item in children {
        if !settings.accepts(&item.uri) || !visited.insert(item.uri.clone()) {
            continue;
        }
        match item.kind.class() {
            ItemClass::Track => return Ok(Some(item.uri)),
            ItemClass::Folder => {
                if let Some(found) =
                    descend_from(library, Some(&item.uri), settings, unknown, rng, visited)?
                {
                    return Ok(Some(found));
                }
            }
            ItemClass::Unknown => unknown.warn_once(&item.kind, &item.uri),
        }
    }

    Ok(None)
}
