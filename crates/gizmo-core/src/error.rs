//! Error types for gizmo-core
//!
//! The per-frame path is infallible; these errors only come from decoding
//! host integers and from configuration I/O.

/// Gizmo-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GizmoError {
    /// Filesystem failure while reading or writing a config file
    #[error("IO error: {0}")]
    Io(String),
    /// Config could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Config could not be parsed
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    /// Host passed a transform mode outside `0..=3`
    #[error("Invalid transform mode: {0}")]
    InvalidMode(i32),
    /// Host passed an unknown handle id
    #[error("Invalid handle id: {0}")]
    InvalidHandleId(i32),
}
