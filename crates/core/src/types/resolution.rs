use serde::Serialize;

/// Outcome of a dry-run resolution: which resolver claimed the request and what it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The request exactly as it was made
    pub request: String,
    /// Name of the resolver whose prefix matched
    pub resolver: String,
    /// The value that would be handed to the host loader
    pub resolved: String,
}
