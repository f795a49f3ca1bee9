//! Interfaces of the media-server runtime this extension plugs into.
//!
//! The host owns the library, the tracklist and the playback engine. The
//! extension only sees them through the traits in `ports`, and the host
//! drives the extension through `Frontend` and `CoreListener`.

mod listener;
mod model;
mod ports;

pub use listener::{CoreListener, Frontend};
pub use model::*;
pub use ports::{Core, Library, Playback, Tracklist};

#[cfg(test)]
mod tests;
