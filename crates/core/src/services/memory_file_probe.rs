//! File probe over a fixed in-memory set of paths
//!
//! Useful for hosts without direct file system access and for tests.

use crate::interfaces::FileProbe;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct MemoryFileProbe {
    files: HashSet<PathBuf>,
}

impl MemoryFileProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file; the path is normalized before it is stored
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let normalized = self.normalize(path.as_ref());
        self.files.insert(normalized);
        self
    }
}

impl FileProbe for MemoryFileProbe {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(&self.normalize(path))
    }
}

impl<P: AsRef<Path>> FromIterator<P> for MemoryFileProbe {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MemoryFileProbe::new(), |probe, path| probe.with_file(path))
    }
}
