//! Storage engine diff check
//!
//! A storage engine binds devices to an on-disk data layout, so once a
//! namespace has been written the only safe change is to add devices.

use super::error::{DiffError, DiffResult};
use super::rules::NamespaceRule;
use crate::document::{DocumentLayout, NamespaceEntry, StorageEngineDescriptor};
use std::collections::HashSet;

/// Compares one namespace's current and proposed storage engine
#[derive(Debug, Clone)]
pub struct StorageEngineDiffChecker {
    device_engine_type: String,
}

impl StorageEngineDiffChecker {
    pub fn new() -> Self {
        Self::with_layout(&DocumentLayout::default())
    }

    pub fn with_layout(layout: &DocumentLayout) -> Self {
        Self {
            device_engine_type: layout.device_engine_type.clone(),
        }
    }

    /// Check that `new` is a safe successor of `old` for `namespace`.
    ///
    /// The engine type is immutable. For device engines the proposed list
    /// must not repeat a device and must keep every current device; order
    /// is irrelevant.
    pub fn check(
        &self,
        old: &StorageEngineDescriptor<'_>,
        new: &StorageEngineDescriptor<'_>,
        namespace: &str,
    ) -> DiffResult<()> {
        if old.engine_type != new.engine_type {
            return Err(DiffError::StorageTypeChanged {
                namespace: namespace.to_string(),
                old_type: old.engine_type.to_string(),
                new_type: new.engine_type.to_string(),
            });
        }

        if new.engine_type != self.device_engine_type {
            return Ok(());
        }

        let mut new_devices = HashSet::new();
        for device in new.device_list() {
            if !new_devices.insert(*device) {
                return Err(DiffError::DuplicateDevice {
                    namespace: namespace.to_string(),
                    device: device.to_string(),
                });
            }
        }

        if let Some(device) = old
            .device_list()
            .iter()
            .find(|device| !new_devices.contains(**device))
        {
            return Err(DiffError::DeviceRemoved {
                namespace: namespace.to_string(),
                device: device.to_string(),
            });
        }

        Ok(())
    }
}

impl Default for StorageEngineDiffChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceRule for StorageEngineDiffChecker {
    fn name(&self) -> &'static str {
        "storage-engine-diff"
    }

    fn check_namespace(&self, old: &NamespaceEntry<'_>, new: &NamespaceEntry<'_>) -> DiffResult<()> {
        self.check(&old.storage_engine, &new.storage_engine, new.name)
    }
}
