//! context-loader
//!
//! Resolve `context!`, `classpath!` and `test!` module requests in front of a
//! host loader. See [`ContextLoader`] for the entry point.
pub use context_loader_core::*;
