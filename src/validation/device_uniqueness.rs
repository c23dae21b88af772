use super::error::{DiffError, DiffResult};
use crate::document::{ConfigDocument, DocumentLayout, NamespaceEntry};
use std::collections::HashMap;

/// Document-wide check that every device backs at most one namespace.
///
/// Runs over the whole proposed document, so namespaces without a previous
/// configuration are covered too. A device repeated inside a single
/// namespace's own list is rejected the same way.
#[derive(Debug, Clone, Default)]
pub struct GlobalDeviceUniquenessChecker {
    layout: DocumentLayout,
}

impl GlobalDeviceUniquenessChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: DocumentLayout) -> Self {
        Self { layout }
    }

    pub fn check(&self, document: &ConfigDocument) -> DiffResult<()> {
        let namespaces = document.namespaces(&self.layout)?;
        self.check_entries(&namespaces)
    }

    /// Same as [`check`](Self::check) over already extracted entries.
    pub fn check_entries(&self, namespaces: &[NamespaceEntry<'_>]) -> DiffResult<()> {
        let mut claims: HashMap<&str, &str> = HashMap::new();

        for namespace in namespaces
            .iter()
            .filter(|ns| ns.storage_engine.engine_type == self.layout.device_engine_type)
        {
            for device in namespace.storage_engine.device_list() {
                if let Some(claimed_by) = claims.insert(*device, namespace.name) {
                    return Err(DiffError::DeviceAlreadyInUse {
                        device: device.to_string(),
                        claimed_by: claimed_by.to_string(),
                        conflicting: namespace.name.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: serde_json::Value) -> DiffResult<()> {
        let document = ConfigDocument::new(value).unwrap();
        GlobalDeviceUniquenessChecker::new().check(&document)
    }

    #[test]
    fn test_distinct_devices_pass() {
        assert!(check(json!({
            "namespaces": [
                { "name": "ns0", "storage-engine": { "type": "device", "devices": ["/d1", "/d2"] } },
                { "name": "ns1", "storage-engine": { "type": "device", "devices": ["/d3"] } },
                { "name": "cache", "storage-engine": { "type": "memory" } }
            ]
        }))
        .is_ok());
    }

    #[test]
    fn test_shared_device_rejected_with_first_claimant() {
        let err = check(json!({
            "namespaces": [
                { "name": "ns0", "storage-engine": { "type": "device", "devices": ["/d1", "/d2"] } },
                { "name": "ns1", "storage-engine": { "type": "device", "devices": ["/d3"] } },
                { "name": "ns2", "storage-engine": { "type": "device", "devices": ["/d4", "/d2"] } }
            ]
        }))
        .unwrap_err();

        assert_eq!(
            err,
            DiffError::DeviceAlreadyInUse {
                device: "/d2".to_string(),
                claimed_by: "ns0".to_string(),
                conflicting: "ns2".to_string(),
            }
        );
    }

    #[test]
    fn test_self_duplicate_rejected() {
        let err = check(json!({
            "namespaces": [
                { "name": "ns0", "storage-engine": { "type": "device", "devices": ["/d1", "/d1"] } }
            ]
        }))
        .unwrap_err();

        assert_eq!(
            err,
            DiffError::DeviceAlreadyInUse {
                device: "/d1".to_string(),
                claimed_by: "ns0".to_string(),
                conflicting: "ns0".to_string(),
            }
        );
    }

    #[test]
    fn test_no_namespaces_pass() {
        assert!(check(json!({ "service": {} })).is_ok());
    }

    #[test]
    fn test_malformed_document_surfaces() {
        assert!(matches!(
            check(json!({ "namespaces": "test" })),
            Err(DiffError::MalformedDocument(_))
        ));
    }
}
