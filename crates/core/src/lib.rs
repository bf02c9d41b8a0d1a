//! context-loader - Prefix-based module alias resolution
//!
//! This crate sits in front of a host's module loader and provides:
//! - `context!name` aliases resolved through a configurable alias table
//! - `classpath!path` lookups across an ordered list of search roots
//! - `test!path` lookups relative to the test directory
//! - Load-once caching keyed by the original, unresolved request
pub mod cache;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod loader;
pub mod registry;
pub mod resolvers;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, LoadError, Result};
pub use types::*;

// Re-export main API components
pub use config::LoaderConfig;
pub use interfaces::{FileProbe, HostLoader, PrefixResolver, ResolveContext};
pub use loader::{ContextLoader, ContextLoaderBuilder};
pub use registry::{AliasTable, ResolverSet, ResolverSetBuilder, SearchRoots};
pub use services::{MemoryFileProbe, OsFileProbe};
