//! Caching of loaded modules keyed by the original, unresolved request

pub mod resolution_cache;

// Re-export the main cache type
pub use resolution_cache::ResolutionCache;
