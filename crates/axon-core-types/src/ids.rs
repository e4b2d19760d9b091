//! Opaque identity types for observer ownership and broadcast correlation
//!
//! Observer removal is matched on an explicit unique id rather than on the
//! reference identity of the owning object, so the identity survives moves
//! and trait-object indirection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of an observer's owning context
///
/// One ContextId is minted per registered owner (a mediator registration,
/// a controller instance) and stamped onto every observer that owner
/// installs. Removal scans compare this id, never the handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextId(String);

impl ContextId {
    /// Mint a fresh ContextId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Correlation id minted once per broadcast
///
/// Every log record emitted while one notification fans out carries the
/// same DispatchId, so interleaved nested broadcasts can be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DispatchId(String);

impl DispatchId {
    /// Mint a fresh DispatchId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for DispatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DispatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_ids_are_unique() {
        let a = ContextId::new();
        let b = ContextId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_context_id_round_trip() {
        let id = ContextId::new();
        let restored = ContextId::from_string(id.as_str().to_string());
        assert_eq!(id, restored);
    }

    #[test]
    fn test_display_matches_as_str() {
        let id = DispatchId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }
}
