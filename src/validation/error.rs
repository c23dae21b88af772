//! Admission errors
//!
//! Every variant carries the namespace and device context needed to render
//! an operator-facing message without re-reading either document.

use crate::document::DocumentError;
use thiserror::Error;

pub type DiffResult<T> = Result<T, DiffError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error(
        "Namespace '{namespace}': storage-engine type cannot change from '{old_type}' to '{new_type}'"
    )]
    StorageTypeChanged {
        namespace: String,
        old_type: String,
        new_type: String,
    },

    #[error("Namespace '{namespace}': device '{device}' cannot be removed")]
    DeviceRemoved { namespace: String, device: String },

    #[error("Namespace '{namespace}': device '{device}' is listed more than once")]
    DuplicateDevice { namespace: String, device: String },

    #[error(
        "Device '{device}' of namespace '{conflicting}' is already in use by namespace '{claimed_by}'"
    )]
    DeviceAlreadyInUse {
        device: String,
        claimed_by: String,
        conflicting: String,
    },

    #[error("Malformed configuration document: {0}")]
    MalformedDocument(#[from] DocumentError),
}

impl DiffError {
    /// Namespace the violation was found in
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::StorageTypeChanged { namespace, .. }
            | Self::DeviceRemoved { namespace, .. }
            | Self::DuplicateDevice { namespace, .. } => Some(namespace),
            Self::DeviceAlreadyInUse { conflicting, .. } => Some(conflicting),
            Self::MalformedDocument(_) => None,
        }
    }

    /// Device path involved in the violation, if any
    pub fn device(&self) -> Option<&str> {
        match self {
            Self::DeviceRemoved { device, .. }
            | Self::DuplicateDevice { device, .. }
            | Self::DeviceAlreadyInUse { device, .. } => Some(device),
            Self::StorageTypeChanged { .. } | Self::MalformedDocument(_) => None,
        }
    }
}
