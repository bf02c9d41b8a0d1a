//! Modules that require each other while loading on different threads

use context_loader::{
    ContextLoader, HostLoader, LoaderConfig, MemoryFileProbe, Specifier,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, OnceLock, mpsc};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct CrossHostError(String);

/// Host whose `a.js` requires `context!b` and whose `b.js` requires `context!a`.
/// The first two loads meet at a barrier so both are in flight together.
struct CrossHost {
    arrivals: AtomicUsize,
    both_loading: Barrier,
}

impl HostLoader for CrossHost {
    type Module = Arc<String>;
    type Context = ();
    type Error = CrossHostError;

    fn load(
        &self,
        specifier: &Specifier,
        _parent: Option<&()>,
        _is_main: bool,
    ) -> Result<Arc<String>, CrossHostError> {
        let path = specifier.to_string();
        let dependency = if path.ends_with("a.js") {
            "context!b"
        } else if path.ends_with("b.js") {
            "context!a"
        } else {
            return Err(CrossHostError(format!("Cannot find module '{path}'")));
        };

        if self.arrivals.fetch_add(1, Ordering::SeqCst) < 2 {
            self.both_loading.wait();
        }

        let loaded = cross_loader()
            .require(dependency)
            .map_err(|e| CrossHostError(e.to_string()))?;
        Ok(Arc::new(format!("{path}+{loaded}")))
    }
}

fn cross_loader() -> &'static ContextLoader<CrossHost> {
    static LOADER: OnceLock<ContextLoader<CrossHost>> = OnceLock::new();
    LOADER.get_or_init(|| {
        let host = CrossHost {
            arrivals: AtomicUsize::new(0),
            both_loading: Barrier::new(2),
        };
        let config = LoaderConfig {
            context: [
                ("a".to_string(), "classpath!a".to_string()),
                ("b".to_string(), "classpath!b".to_string()),
            ]
            .into(),
            ..LoaderConfig::default()
        };
        ContextLoader::builder(host)
            .with_working_dir("/app")
            .with_probe(["/app/a.js", "/app/b.js"].into_iter().collect::<MemoryFileProbe>())
            .with_config(config)
            .build()
            .unwrap()
    })
}

#[test]
fn test_mutual_requires_on_two_threads_fail_instead_of_hanging() {
    let (tx, rx) = mpsc::channel();
    for request in ["context!a", "context!b"] {
        let tx = tx.clone();
        std::thread::spawn(move || {
            let outcome = cross_loader().require(request).map_err(|e| e.to_string());
            let _ = tx.send((request, outcome));
        });
    }

    let mut outcomes = Vec::new();
    for _ in 0..2 {
        let outcome = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("a require call never returned");
        outcomes.push(outcome);
    }

    // Neither module can finish without the other, so both requests fail
    for (request, outcome) in outcomes {
        let message = outcome.expect_err(request);
        assert!(
            message.contains("was made again while it was still loading"),
            "{request}: {message}"
        );
    }
    assert!(cross_loader().cached_requests().is_empty());
}
