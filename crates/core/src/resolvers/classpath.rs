use crate::{
    error::{Error, Result},
    interfaces::{PrefixResolver, ResolveContext},
};
use std::path::Path;
use tracing::{debug, trace};

/// Resolves `classpath!path` by searching the search roots in order.
///
/// The candidate for each root is `root/path`, with the default extension
/// appended when `path` has none. The first candidate that is a file wins.
/// Relative roots are taken relative to the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClasspathResolver;

impl ClasspathResolver {
    pub fn new() -> Self {
        Self
    }

    fn file_name(remainder: &str, default_extension: &str) -> String {
        let relative = remainder.trim_start_matches(['/', '\\']);
        if Path::new(relative).extension().is_some() || default_extension.is_empty() {
            relative.to_string()
        } else {
            format!("{relative}.{default_extension}")
        }
    }
}

impl PrefixResolver for ClasspathResolver {
    fn name(&self) -> &str {
        "classpath"
    }

    fn prefix(&self) -> &str {
        "classpath!"
    }

    fn resolve(&self, request: &str, ctx: &ResolveContext<'_>) -> Result<String> {
        if !self.matches(request) {
            return Ok(request.to_string());
        }

        let remainder = self.strip(request);
        let file = Self::file_name(remainder, ctx.default_extension);

        let mut searched = Vec::with_capacity(ctx.roots.len());
        for root in ctx.roots {
            let base = if root.is_relative() {
                ctx.cwd.join(root)
            } else {
                root.clone()
            };
            let candidate = base.join(&file);
            trace!("classpath candidate: {:?}", candidate);

            if ctx.probe.is_file(&candidate) {
                debug!("classpath!{} found at {:?}", remainder, candidate);
                return Ok(candidate.to_string_lossy().into_owned());
            }
            searched.push(candidate);
        }

        Err(Error::NotFound {
            remainder: remainder.to_string(),
            cwd: ctx.cwd.to_path_buf(),
            searched,
        })
    }
}
