pub mod resolution;
pub mod specifier;

// Re-export commonly used types
pub use resolution::Resolution;
pub use specifier::Specifier;
