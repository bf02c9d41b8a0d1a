//! Ordered collection of prefix resolvers
//!
//! Dispatch walks the set in registration order and the first resolver whose
//! prefix matches claims the request.

use crate::interfaces::PrefixResolver;
use crate::resolvers::{AliasResolver, ClasspathResolver, TestRootResolver};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct ResolverSet {
    resolvers: Vec<Arc<dyn PrefixResolver>>,
}

impl std::fmt::Debug for ResolverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverSet")
            .field("resolvers", &self.names())
            .finish()
    }
}

impl ResolverSet {
    /// The standard set: `context!`, `classpath!`, `test!`, in that order
    pub fn standard() -> Self {
        ResolverSetBuilder::new().with_standard().build()
    }

    /// Append a resolver. A resolver registered under an existing name
    /// replaces the old one in place, keeping its position.
    pub fn register(&mut self, resolver: Arc<dyn PrefixResolver>) {
        match self
            .resolvers
            .iter()
            .position(|r| r.name() == resolver.name())
        {
            Some(index) => self.resolvers[index] = resolver,
            None => self.resolvers.push(resolver),
        }
    }

    /// First resolver, in registration order, whose prefix matches `request`
    pub fn find_match(&self, request: &str) -> Option<&Arc<dyn PrefixResolver>> {
        self.resolvers.iter().find(|r| r.matches(request))
    }

    /// Every resolver except the one named `name`, in registration order
    pub fn others<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Arc<dyn PrefixResolver>> + 'a {
        self.resolvers.iter().filter(move |r| r.name() != name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

/// Builder for creating custom resolver sets
#[derive(Default)]
pub struct ResolverSetBuilder {
    set: ResolverSet,
}

impl ResolverSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn PrefixResolver>) -> Self {
        self.set.register(resolver);
        self
    }

    /// Add the three standard resolvers
    pub fn with_standard(self) -> Self {
        self.with_resolver(Arc::new(AliasResolver::new()))
            .with_resolver(Arc::new(ClasspathResolver::new()))
            .with_resolver(Arc::new(TestRootResolver::new()))
    }

    pub fn build(self) -> ResolverSet {
        self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::interfaces::ResolveContext;

    struct UpperResolver;

    impl PrefixResolver for UpperResolver {
        fn name(&self) -> &str {
            "upper"
        }

        fn prefix(&self) -> &str {
            "upper!"
        }

        fn resolve(&self, request: &str, _ctx: &ResolveContext<'_>) -> Result<String> {
            Ok(self.strip(request).to_uppercase())
        }
    }

    #[test]
    fn test_standard_registration_order() {
        let set = ResolverSet::standard();
        assert_eq!(set.names(), vec!["context", "classpath", "test"]);
    }

    #[test]
    fn test_find_match_by_prefix() {
        let set = ResolverSet::standard();
        assert_eq!(set.find_match("classpath!a/b").map(|r| r.name()), Some("classpath"));
        assert_eq!(set.find_match("test!fixtures/x.json").map(|r| r.name()), Some("test"));
        assert!(set.find_match("./relative/module").is_none());
        assert!(set.find_match("prefix context!inside").is_none());
    }

    #[test]
    fn test_custom_resolver_appended_after_standard() {
        let set = ResolverSetBuilder::new()
            .with_standard()
            .with_resolver(Arc::new(UpperResolver))
            .build();
        assert_eq!(set.names(), vec!["context", "classpath", "test", "upper"]);
        assert_eq!(
            set.others("context").map(|r| r.name()).collect::<Vec<_>>(),
            vec!["classpath", "test", "upper"]
        );
    }

    #[test]
    fn test_register_same_name_replaces_in_place() {
        let mut set = ResolverSet::standard();
        set.register(Arc::new(ClasspathResolver::new()));
        assert_eq!(set.len(), 3);
        assert_eq!(set.names(), vec!["context", "classpath", "test"]);
    }
}
