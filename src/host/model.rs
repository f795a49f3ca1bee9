use std::fmt;

/// Kind of a library reference as reported by the host's browse call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Track,
    Directory,
    Artist,
    Album,
    Playlist,
    /// Anything the host reports that this crate does not know about.
    Other(String),
}

/// How the walker treats an item.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ItemClass {
    /// Playable, ends up in the track cache.
    Track,
    /// Browsable container.
    Folder,
    Unknown,
}

impl ItemKind {
    pub fn class(&self) -> ItemClass {
        match self {
            ItemKind::Track => ItemClass::Track,
            ItemKind::Directory | ItemKind::Artist | ItemKind::Album => ItemClass::Folder,
            ItemKind::Playlist | ItemKind::Other(_) => ItemClass::Unknown,
        }
    }

    /// Stable lowercase name, used in logs.
    pub fn label(&self) -> &str {
        match self {
            ItemKind::Track => "track",
            ItemKind::Directory => "directory",
            ItemKind::Artist => "artist",
            ItemKind::Album => "album",
            ItemKind::Playlist => "playlist",
            ItemKind::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for ItemKind {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "track" => ItemKind::Track,
            "directory" => ItemKind::Directory,
            "artist" => ItemKind::Artist,
            "album" => ItemKind::Album,
            "playlist" => ItemKind::Playlist,
            other => ItemKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reference returned by `Library::browse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub uri: String,
    pub name: Option<String>,
    pub kind: ItemKind,
}

impl CatalogItem {
    pub fn new(uri: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            uri: uri.into(),
            name: None,
            kind,
        }
    }

    pub fn track(uri: impl Into<String>) -> Self {
        Self::new(uri, ItemKind::Track)
    }

    pub fn directory(uri: impl Into<String>) -> Self {
        Self::new(uri, ItemKind::Directory)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Host-assigned identifier of a tracklist entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the host tracklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub id: EntryId,
    pub uri: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    Playing,
    Paused,
    #[default]
    Stopped,
}

/// Tracklist modes pushed to the host through `Playback::configure`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct TracklistOptions {
    pub random: bool,
    pub repeat: bool,
    pub single: bool,
}
