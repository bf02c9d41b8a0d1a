use crate::{
    error::Result,
    interfaces::{PrefixResolver, ResolveContext},
};
use tracing::debug;

const TEST_DIR: &str = "test";

/// Resolves `test!path` to `{cwd}/test/path`.
///
/// When no file exists there, the request is returned exactly as given so the
/// host loader gets to try (and fail on) the raw form.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestRootResolver;

impl TestRootResolver {
    pub fn new() -> Self {
        Self
    }
}

impl PrefixResolver for TestRootResolver {
    fn name(&self) -> &str {
        "test"
    }

    fn prefix(&self) -> &str {
        "test!"
    }

    fn resolve(&self, request: &str, ctx: &ResolveContext<'_>) -> Result<String> {
        if !self.matches(request) {
            return Ok(request.to_string());
        }

        let relative = self.strip(request).trim_start_matches(['/', '\\']);
        let candidate = ctx
            .probe
            .normalize(&ctx.cwd.join(TEST_DIR).join(relative));

        if ctx.probe.is_file(&candidate) {
            Ok(candidate.to_string_lossy().into_owned())
        } else {
            debug!("{:?} does not exist, leaving {} unresolved", candidate, request);
            Ok(request.to_string())
        }
    }
}
