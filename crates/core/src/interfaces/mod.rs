//! Trait seams between the resolution core and its collaborators
//!
//! The core never touches the host's module system, the file system or the
//! process directly; it goes through these interfaces so hosts and tests can
//! supply their own.

pub mod file_probe;
pub mod host_loader;
pub mod prefix_resolver;

pub use file_probe::FileProbe;
pub use host_loader::HostLoader;
pub use prefix_resolver::{PrefixResolver, ResolveContext};
