//! Merging of configuration payloads
//!
//! Later payloads add to earlier ones: aliases are shallow-merged (a repeated
//! name overrides), search roots are appended as given.

use super::LoaderConfig;
use tracing::debug;

impl LoaderConfig {
    /// Merge `other` into `self`
    pub fn merge(&mut self, other: LoaderConfig) {
        debug!(
            "Merging config: {} aliases, {} search roots",
            other.context.len(),
            other.classpath.len()
        );

        self.context.extend(other.context);
        self.classpath.extend(other.classpath);
        if other.default_extension.is_some() {
            self.default_extension = other.default_extension;
        }
    }
}
