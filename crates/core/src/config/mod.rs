//! Configuration for the context loader
//!
//! A JSON document with an optional `context` alias table and an optional
//! `classpath` list of extra search roots:
//!
//! ```json
//! {
//!   "context": {
//!     "userDao": "classpath!services/dao/mongodb/UserDAO",
//!     "logProperties": "classpath!logProperties.json"
//!   },
//!   "classpath": ["/opt/shared/lib/"]
//! }
//! ```

mod merge;
mod settings;

// Re-export main types
pub use settings::{CONFIG_ENV_VAR, DEFAULT_EXTENSION, LoaderConfig};
