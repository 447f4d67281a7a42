//! Unified error types for the domain layer
//!
//! Capability misuse is the only runtime failure an animal can report. Parsing
//! helpers for capability names share the same error type so callers never
//! need to reach for String errors.

use thiserror::Error;

use crate::capabilities::Capability;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The animal does not provide the requested capability
    #[error("Capability not implemented: {animal} is not {capability}")]
    CapabilityNotImplemented {
        capability: Capability,
        animal: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a capability error for an animal that lacks `capability`.
    ///
    /// # Example
    /// ```ignore
    /// let movable = animal
    ///     .as_movable_mut()
    ///     .ok_or_else(|| DomainError::capability_not_implemented(Capability::Movable, "Rex"))?;
    /// ```
    pub fn capability_not_implemented(capability: Capability, animal: impl Into<String>) -> Self {
        Self::CapabilityNotImplemented {
            capability,
            animal: animal.into(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
