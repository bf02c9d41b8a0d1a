//! Host module loader interface
//!
//! The context loader sits in front of the host's own loading entry point.
//! Once a request is resolved to a concrete path it is handed to this trait;
//! requests that carry no known prefix are forwarded to it untouched.

use crate::types::Specifier;

/// The platform mechanism that turns a concrete path into a loaded module
pub trait HostLoader: Send + Sync {
    /// Loaded module value. Cloned out of the resolution cache on every hit,
    /// so hosts usually make this a shared handle (`Arc<...>`).
    type Module: Clone + Send;

    /// Caller metadata (the requiring module, for example); opaque to the core
    type Context;

    /// The host's own failure type, passed through unchanged
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(
        &self,
        specifier: &Specifier,
        parent: Option<&Self::Context>,
        is_main: bool,
    ) -> Result<Self::Module, Self::Error>;
}
