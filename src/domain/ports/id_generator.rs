//! Identifier generation port.

/// Produces identifiers for newly created entities.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
