//! The context loader: dispatcher in front of the host loader plus the
//! enable/disable/reconfigure control surface
//!
//! Hosts wire [`ContextLoader::load`] into whatever module-loading hook their
//! platform offers. Every request then passes through it:
//!
//! - disabled: forwarded to the host untouched
//! - non-textual: rejected with [`Error::InvalidRequest`]
//! - carries a registered prefix: resolved once, loaded once, cached under the
//!   original request
//! - anything else: forwarded to the host untouched

use crate::{
    cache::ResolutionCache,
    config::LoaderConfig,
    error::{Error, LoadError, Result},
    interfaces::{FileProbe, HostLoader, PrefixResolver, ResolveContext},
    registry::{AliasTable, ResolverSet, SearchRoots},
    services::OsFileProbe,
    types::{Resolution, Specifier},
};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use tracing::{debug, info};

/// Reconfigurable resolution state
#[derive(Debug)]
struct LoaderState {
    aliases: AliasTable,
    roots: SearchRoots,
    default_extension: String,
}

pub struct ContextLoader<L: HostLoader> {
    host: L,
    enabled: AtomicBool,
    state: RwLock<LoaderState>,
    resolvers: ResolverSet,
    probe: Box<dyn FileProbe>,
    cwd: PathBuf,
    cache: ResolutionCache<L::Module>,
}

impl<L: HostLoader> ContextLoader<L> {
    pub fn builder(host: L) -> ContextLoaderBuilder<L> {
        ContextLoaderBuilder::new(host)
    }

    /// Loader for the current process: working directory from the OS,
    /// configuration discovered from there, file system probe, standard resolvers
    pub fn init(host: L) -> Result<Self> {
        Self::init_in(host, std::env::current_dir()?)
    }

    /// Like [`init`](Self::init) for a process rooted at `cwd`
    pub fn init_in(host: L, cwd: impl Into<PathBuf>) -> Result<Self> {
        let cwd = cwd.into();
        let config = LoaderConfig::discover(&cwd)?;
        Self::builder(host)
            .with_working_dir(cwd)
            .with_config(config)
            .build()
    }

    /// Turn prefix resolution on. The loader starts enabled.
    pub fn enable(&self) -> &Self {
        self.enabled.store(true, Ordering::SeqCst);
        self
    }

    /// Turn prefix resolution off; every request goes straight to the host
    pub fn disable(&self) -> &Self {
        self.enabled.store(false, Ordering::SeqCst);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Merge aliases into the alias table and append search roots
    pub fn reconfigure(&self, config: LoaderConfig) -> &Self {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        info!(
            "Reconfiguring context loader: {} aliases, {} search roots appended",
            config.context.len(),
            config.classpath.len()
        );

        state.aliases.merge(config.context);
        let cwd = &self.cwd;
        state.roots.append(config.classpath.into_iter().map(|root| cwd.join(root)));
        if let Some(extension) = config.default_extension {
            state.default_extension = extension;
        }
        self
    }

    /// [`reconfigure`](Self::reconfigure) from a raw JSON payload
    pub fn reconfigure_json(&self, payload: serde_json::Value) -> Result<&Self> {
        let config: LoaderConfig = serde_json::from_value(payload)?;
        Ok(self.reconfigure(config))
    }

    /// Resolve `request` without loading or caching it.
    ///
    /// `None` when the loader is disabled or no resolver claims the request.
    pub fn resolve(&self, request: &str) -> Result<Option<Resolution>> {
        if !self.is_enabled() {
            return Ok(None);
        }
        let Some(resolver) = self.resolvers.find_match(request) else {
            return Ok(None);
        };

        let resolved = self.resolve_with(resolver.as_ref(), request)?;
        Ok(Some(Resolution {
            request: request.to_string(),
            resolver: resolver.name().to_string(),
            resolved,
        }))
    }

    /// The wrapped host entry point
    pub fn load(
        &self,
        specifier: &Specifier,
        parent: Option<&L::Context>,
        is_main: bool,
    ) -> std::result::Result<L::Module, LoadError<L::Error>> {
        if !self.is_enabled() {
            return self.pass_through(specifier, parent, is_main);
        }

        let request = specifier
            .as_text()
            .ok_or_else(|| Error::InvalidRequest(specifier.to_string()))?;

        let Some(resolver) = self.resolvers.find_match(request) else {
            debug!("No prefix matches {}, passing through", request);
            return self.pass_through(specifier, parent, is_main);
        };

        if let Some(cached) = self.cache.get(request) {
            debug!("Cache hit for {}", request);
            return Ok(cached);
        }

        self.cache.get_or_try_insert_with(request, || {
            let resolved = self.resolve_with(resolver.as_ref(), request)?;
            debug!("{} resolved by {} to {}", request, resolver.name(), resolved);
            self.host
                .load(&Specifier::Text(resolved), parent, is_main)
                .map_err(LoadError::Host)
        })
    }

    /// Shorthand for loading a textual request with no caller context
    pub fn require(&self, request: &str) -> std::result::Result<L::Module, LoadError<L::Error>> {
        self.load(&Specifier::from(request), None, false)
    }

    fn pass_through(
        &self,
        specifier: &Specifier,
        parent: Option<&L::Context>,
        is_main: bool,
    ) -> std::result::Result<L::Module, LoadError<L::Error>> {
        self.host
            .load(specifier, parent, is_main)
            .map_err(LoadError::Host)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, LoaderState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one resolver against a consistent view of aliases and roots.
    /// The read lock is released before anything reaches the host.
    fn resolve_with(&self, resolver: &dyn PrefixResolver, request: &str) -> Result<String> {
        let state = self.read_state();
        let ctx = ResolveContext {
            aliases: &state.aliases,
            roots: state.roots.as_slice(),
            cwd: &self.cwd,
            default_extension: &state.default_extension,
            probe: &*self.probe,
            resolvers: &self.resolvers,
        };
        resolver.resolve(request, &ctx)
    }

    pub fn search_roots(&self) -> Vec<PathBuf> {
        self.read_state().roots.snapshot()
    }

    pub fn alias(&self, name: &str) -> Option<String> {
        self.read_state().aliases.get(name).map(str::to_string)
    }

    /// Original requests whose load has completed, sorted
    pub fn cached_requests(&self) -> Vec<String> {
        self.cache.keys()
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn resolvers(&self) -> &ResolverSet {
        &self.resolvers
    }

    pub fn host(&self) -> &L {
        &self.host
    }
}

/// Builder for a [`ContextLoader`]
pub struct ContextLoaderBuilder<L: HostLoader> {
    host: L,
    cwd: Option<PathBuf>,
    probe: Option<Box<dyn FileProbe>>,
    config: LoaderConfig,
    resolvers: Option<ResolverSet>,
}

impl<L: HostLoader> ContextLoaderBuilder<L> {
    pub fn new(host: L) -> Self {
        Self {
            host,
            cwd: None,
            probe: None,
            config: LoaderConfig::default(),
            resolvers: None,
        }
    }

    /// Working directory seeding the default search roots; the process's
    /// current directory if not set
    pub fn with_working_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_probe(mut self, probe: impl FileProbe + 'static) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    /// Merge a configuration payload; may be called repeatedly
    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config.merge(config);
        self
    }

    /// Replace the standard resolver set
    pub fn with_resolvers(mut self, resolvers: ResolverSet) -> Self {
        self.resolvers = Some(resolvers);
        self
    }

    /// Register one more resolver after the current set
    pub fn with_resolver(mut self, resolver: Arc<dyn PrefixResolver>) -> Self {
        self.resolvers
            .get_or_insert_with(ResolverSet::standard)
            .register(resolver);
        self
    }

    pub fn build(self) -> Result<ContextLoader<L>> {
        let cwd = match self.cwd {
            Some(cwd) => cwd,
            None => std::env::current_dir()?,
        };

        let default_extension = self.config.default_extension().to_string();
        let mut roots = SearchRoots::with_defaults(&cwd);
        roots.append(self.config.classpath.iter().map(|root| cwd.join(root)));
        let aliases: AliasTable = self.config.context.into_iter().collect();

        debug!(
            "Context loader at {:?}: {} aliases, {} search roots",
            cwd,
            aliases.len(),
            roots.len()
        );

        Ok(ContextLoader {
            host: self.host,
            enabled: AtomicBool::new(true),
            state: RwLock::new(LoaderState {
                aliases,
                roots,
                default_extension,
            }),
            resolvers: self.resolvers.unwrap_or_else(ResolverSet::standard),
            probe: self.probe.unwrap_or_else(|| Box::new(OsFileProbe::new())),
            cwd,
            cache: ResolutionCache::new(),
        })
    }
}
