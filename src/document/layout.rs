use serde::{Deserialize, Serialize};

/// Key layout of a server configuration document
///
/// Names the handful of keys the accessor reads. Every other key of the
/// document is passed through unexamined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocumentLayout {
    /// Top-level key holding the list of namespace entries
    pub namespaces_key: String,

    /// Key of the namespace name inside an entry
    pub name_key: String,

    /// Key of the storage-engine sub-document inside an entry
    pub storage_engine_key: String,

    /// Key of the engine type inside the storage-engine sub-document
    pub type_key: String,

    /// Key of the device list inside the storage-engine sub-document
    pub devices_key: String,

    /// Engine type whose namespaces are backed by block devices
    pub device_engine_type: String,
}

impl DocumentLayout {
    /// Create the layout used by the database's own configuration format
    pub fn new() -> Self {
        Self {
            namespaces_key: "namespaces".to_string(),
            name_key: "name".to_string(),
            storage_engine_key: "storage-engine".to_string(),
            type_key: "type".to_string(),
            devices_key: "devices".to_string(),
            device_engine_type: "device".to_string(),
        }
    }

    /// Set the namespaces key
    pub fn namespaces_key(mut self, key: &str) -> Self {
        self.namespaces_key = key.to_string();
        self
    }

    /// Set the namespace name key
    pub fn name_key(mut self, key: &str) -> Self {
        self.name_key = key.to_string();
        self
    }

    /// Set the storage-engine key
    pub fn storage_engine_key(mut self, key: &str) -> Self {
        self.storage_engine_key = key.to_string();
        self
    }

    /// Set the engine type key
    pub fn type_key(mut self, key: &str) -> Self {
        self.type_key = key.to_string();
        self
    }

    /// Set the device list key
    pub fn devices_key(mut self, key: &str) -> Self {
        self.devices_key = key.to_string();
        self
    }

    /// Set the engine type that carries a device list
    pub fn device_engine_type(mut self, engine_type: &str) -> Self {
        self.device_engine_type = engine_type.to_string();
        self
    }
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self::new()
    }
}
