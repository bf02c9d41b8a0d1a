//! Registries consulted during resolution: search roots, alias table and the
//! ordered set of prefix resolvers

pub mod alias_table;
pub mod resolver_set;
pub mod search_roots;

pub use alias_table::AliasTable;
pub use resolver_set::{ResolverSet, ResolverSetBuilder};
pub use search_roots::SearchRoots;
