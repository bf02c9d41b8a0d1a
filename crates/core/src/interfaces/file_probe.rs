//! File existence interface
//!
//! Abstracts the synchronous "is there a regular file here" query so
//! resolution can run against an in-memory tree.

use std::path::{Component, Path, PathBuf};

/// Trait for file existence queries
pub trait FileProbe: Send + Sync {
    /// Check if a regular file exists at `path`
    fn is_file(&self, path: &Path) -> bool;

    /// Lexically normalize a path (drop `.`, fold `..`)
    fn normalize(&self, path: &Path) -> PathBuf {
        let mut components: Vec<Component<'_>> = Vec::new();
        for component in path.components() {
            match component {
                Component::ParentDir => match components.last() {
                    Some(Component::Normal(_)) => {
                        components.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => components.push(component),
                },
                Component::CurDir => {}
                c => components.push(c),
            }
        }

        components.iter().collect()
    }
}
