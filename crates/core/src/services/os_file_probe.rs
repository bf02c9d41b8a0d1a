//! File probe backed by the real file system

use crate::interfaces::FileProbe;
use std::path::Path;

/// Default implementation of FileProbe using std::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileProbe;

impl OsFileProbe {
    pub fn new() -> Self {
        Self
    }
}

impl FileProbe for OsFileProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
