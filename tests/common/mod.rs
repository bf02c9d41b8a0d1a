//! Shared fixtures for the integration tests

#![allow(dead_code)]

use context_loader::{HostLoader, Specifier};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use tempfile::TempDir;

static TRACING: Once = Once::new();

/// Route library logs to the test output; honours RUST_LOG
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Debug, thiserror::Error)]
pub enum JsonHostError {
    #[error("Cannot find module '{0}'")]
    NotFound(String),

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Host loader that "loads" JSON documents, resolving relative requests
/// against the directory of the requiring module
pub struct JsonHost {
    base: PathBuf,
    loads: AtomicUsize,
}

impl JsonHost {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl HostLoader for JsonHost {
    type Module = Arc<Value>;
    type Context = PathBuf;
    type Error = JsonHostError;

    fn load(
        &self,
        specifier: &Specifier,
        parent: Option<&PathBuf>,
        _is_main: bool,
    ) -> Result<Arc<Value>, JsonHostError> {
        self.loads.fetch_add(1, Ordering::SeqCst);

        let request = specifier.to_string();
        let base = parent.unwrap_or(&self.base);
        let path = base.join(&request);
        let contents =
            fs::read_to_string(&path).map_err(|_| JsonHostError::NotFound(request.clone()))?;
        let value = serde_json::from_str(&contents)
            .map_err(|source| JsonHostError::Parse { path, source })?;
        Ok(Arc::new(value))
    }
}

/// An application tree:
///
/// ```text
/// app/
///   config/default.json
///   src/services/dao/UserDAO.json
///   test/fixtures/{users,mpatt,pford}.json
///   test/spec/
/// ```
pub struct AppTree {
    pub dir: TempDir,
}

impl AppTree {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let tree = Self { dir };

        tree.write(
            "test/fixtures/users.json",
            &serde_json::json!([
                { "first": "Pete", "last": "Ford" },
                { "first": "Mara", "last": "Patt" },
                { "first": "Ada", "last": "Lovelace" }
            ]),
        );
        tree.write(
            "test/fixtures/mpatt.json",
            &serde_json::json!({ "name": "M. Patt", "occupation": "Software Developer" }),
        );
        tree.write(
            "test/fixtures/pford.json",
            &serde_json::json!({ "name": "P. Ford", "occupation": "CTO" }),
        );
        tree.write(
            "src/services/dao/UserDAO.json",
            &serde_json::json!({ "kind": "mongodb" }),
        );
        fs::create_dir_all(tree.root().join("test/spec")).unwrap();
        tree
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Directory of the "requiring" module used for relative requests
    pub fn spec_dir(&self) -> PathBuf {
        self.root().join("test/spec")
    }

    pub fn write(&self, relative: &str, value: &Value) {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    }
}
