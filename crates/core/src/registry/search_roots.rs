//! Ordered, append-only list of directories searched by `classpath!` requests

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRoots {
    roots: Vec<PathBuf>,
}

impl SearchRoots {
    /// Baseline roots for a working directory: `{cwd}/`, `{cwd}/src/`, `{cwd}/test/`
    pub fn with_defaults(cwd: &Path) -> Self {
        Self {
            roots: vec![cwd.to_path_buf(), cwd.join("src"), cwd.join("test")],
        }
    }

    /// Append roots to the end of the search order. Duplicates are kept.
    pub fn append<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(paths.into_iter().map(Into::into));
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Copy of the current roots; in-flight resolutions iterate this
    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let roots = SearchRoots::with_defaults(Path::new("/srv/app"));
        assert_eq!(
            roots.as_slice(),
            &[
                PathBuf::from("/srv/app"),
                PathBuf::from("/srv/app/src"),
                PathBuf::from("/srv/app/test"),
            ]
        );
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut roots = SearchRoots::with_defaults(Path::new("/srv/app"));
        roots.append(["/opt/shared", "/srv/app"]);
        roots.append(Vec::<String>::new());
        roots.append(["/opt/late"]);

        assert_eq!(roots.len(), 6);
        assert_eq!(roots.as_slice()[3], PathBuf::from("/opt/shared"));
        assert_eq!(roots.as_slice()[4], PathBuf::from("/srv/app"));
        assert_eq!(roots.as_slice()[5], PathBuf::from("/opt/late"));
    }
}
