use crate::{
    error::{Error, Result},
    interfaces::{PrefixResolver, ResolveContext},
};
use tracing::debug;

/// Resolves `context!name` through the alias table.
///
/// Targets that are themselves `context!` aliases are followed until a
/// non-alias target is reached; revisiting a name is an [`Error::AliasCycle`].
/// The target is then run through every other registered resolver whose
/// prefix it carries, in registration order. That pass repeats while it keeps
/// changing the value, so a resolver may hand back another prefixed string.
/// A value seen twice is an [`Error::AliasCycle`] as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasResolver;

impl AliasResolver {
    pub fn new() -> Self {
        Self
    }

    fn follow_chain<'a>(&self, mut name: &'a str, ctx: &ResolveContext<'a>) -> Result<&'a str> {
        let mut chain: Vec<String> = Vec::new();
        loop {
            if chain.iter().any(|seen| seen == name) {
                chain.push(name.to_string());
                return Err(Error::AliasCycle { chain });
            }
            chain.push(name.to_string());

            let target = ctx
                .aliases
                .get(name)
                .ok_or_else(|| Error::UnknownAlias(name.to_string()))?;
            debug!("alias {} -> {}", name, target);

            if !self.matches(target) {
                return Ok(target);
            }
            name = self.strip(target);
        }
    }
}

impl PrefixResolver for AliasResolver {
    fn name(&self) -> &str {
        "context"
    }

    fn prefix(&self) -> &str {
        "context!"
    }

    fn resolve(&self, request: &str, ctx: &ResolveContext<'_>) -> Result<String> {
        if !self.matches(request) {
            return Ok(request.to_string());
        }

        let mut value = request.to_string();
        let mut seen: Vec<String> = Vec::new();
        loop {
            if self.matches(&value) {
                value = self.follow_chain(self.strip(&value), ctx)?.to_string();
            }
            if seen.contains(&value) {
                seen.push(value);
                return Err(Error::AliasCycle { chain: seen });
            }
            seen.push(value.clone());

            let next = self.dispatch_others(&value, ctx)?;
            if next == value {
                return Ok(value);
            }
            value = next;
        }
    }
}

impl AliasResolver {
    /// One pass over every other resolver whose prefix `value` carries
    fn dispatch_others(&self, value: &str, ctx: &ResolveContext<'_>) -> Result<String> {
        let mut value = value.to_string();
        for resolver in ctx.resolvers.others(self.name()) {
            if resolver.matches(&value) {
                debug!("alias target {} handed to {}", value, resolver.name());
                value = resolver.resolve(&value, ctx)?;
            }
        }
        Ok(value)
    }
}
