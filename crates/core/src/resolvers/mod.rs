//! The standard prefix resolvers
//!
//! - `context!name` looks `name` up in the alias table and resolves the target
//! - `classpath!path` searches every search root in order
//! - `test!path` resolves against `{cwd}/test`, falling back to the raw request

pub mod alias;
pub mod classpath;
pub mod test_root;

pub use alias::AliasResolver;
pub use classpath::ClasspathResolver;
pub use test_root::TestRootResolver;
