//! Library traversal: the full walk that fills the track cache and the
//! randomized descent used while that cache is still cold.

mod descend;
mod unknown;
mod walker;

pub use descend::descend;
pub use unknown::UnknownKinds;
pub use walker::Walker;
