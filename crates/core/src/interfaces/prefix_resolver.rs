//! Prefix resolver interface
//!
//! A prefix resolver recognizes one textual prefix (`context!`, `classpath!`,
//! ...) and turns a request carrying it into either a concrete path or another
//! prefixed string. When an alias target is dispatched, prefixed results are
//! dispatched again until no resolver changes them.

use crate::{
    error::Result,
    interfaces::FileProbe,
    registry::{AliasTable, ResolverSet},
};
use std::path::{Path, PathBuf};

/// Read-only view of everything a resolver may consult during one resolution
pub struct ResolveContext<'a> {
    pub aliases: &'a AliasTable,
    /// Search roots as they stood when the resolution started
    pub roots: &'a [PathBuf],
    pub cwd: &'a Path,
    pub default_extension: &'a str,
    pub probe: &'a dyn FileProbe,
    /// The full resolver set, for resolvers that chain into the others
    pub resolvers: &'a ResolverSet,
}

/// A named prefix resolver
pub trait PrefixResolver: Send + Sync {
    /// Unique name of this resolver (e.g. "classpath")
    fn name(&self) -> &str;

    /// The textual prefix this resolver recognizes, including the `!`
    fn prefix(&self) -> &str;

    /// Does `request` carry this resolver's prefix?
    fn matches(&self, request: &str) -> bool {
        request.starts_with(self.prefix())
    }

    /// Resolve a request carrying this resolver's prefix.
    ///
    /// Requests without the prefix are returned unchanged, so resolvers can be
    /// applied blindly in sequence.
    fn resolve(&self, request: &str, ctx: &ResolveContext<'_>) -> Result<String>;

    /// The request with this resolver's prefix removed
    fn strip<'r>(&self, request: &'r str) -> &'r str {
        request.strip_prefix(self.prefix()).unwrap_or(request)
    }
}
