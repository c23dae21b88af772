//! Read-only accessor over a server configuration document
//!
//! The server configuration is large and evolves independently of the
//! controller, so it is held as an open JSON object. Only the namespace list
//! and each namespace's storage-engine sub-document are translated into
//! typed values; the rest of the document stays opaque.

use super::error::{DocumentError, DocumentResult};
use super::layout::DocumentLayout;
use serde_json::{Map, Value as JsonValue};

/// An immutable server configuration document
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Map<String, JsonValue>,
}

impl ConfigDocument {
    /// Wrap a JSON value; the root must be an object
    pub fn new(value: JsonValue) -> DocumentResult<Self> {
        match value {
            JsonValue::Object(root) => Ok(Self { root }),
            _ => Err(DocumentError::NotAnObject),
        }
    }

    /// Parse a document from JSON text
    pub fn from_json_str(text: &str) -> DocumentResult<Self> {
        let value: JsonValue =
            serde_json::from_str(text).map_err(|e| DocumentError::Parse(e.to_string()))?;
        Self::new(value)
    }

    /// Document with no keys at all
    pub fn empty() -> Self {
        Self { root: Map::new() }
    }

    /// Raw top-level value for a key
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.root.get(key)
    }

    /// Extract namespace entries in document order.
    ///
    /// An absent namespaces key yields an empty list.
    pub fn namespaces<'a>(&'a self, layout: &DocumentLayout) -> DocumentResult<Vec<NamespaceEntry<'a>>> {
        let Some(list) = self.root.get(&layout.namespaces_key) else {
            return Ok(Vec::new());
        };
        let items = list
            .as_array()
            .ok_or_else(|| DocumentError::invalid(layout.namespaces_key.as_str(), "an array"))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let path = format!("{}[{}]", layout.namespaces_key, index);
                NamespaceEntry::from_value(item, &path, layout)
            })
            .collect()
    }
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self::empty()
    }
}

/// One entry of the namespace list
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceEntry<'a> {
    pub name: &'a str,
    pub storage_engine: StorageEngineDescriptor<'a>,
    fields: &'a Map<String, JsonValue>,
}

impl<'a> NamespaceEntry<'a> {
    fn from_value(value: &'a JsonValue, path: &str, layout: &DocumentLayout) -> DocumentResult<Self> {
        let fields = value
            .as_object()
            .ok_or_else(|| DocumentError::invalid(path, "an object"))?;

        let name_path = format!("{}.{}", path, layout.name_key);
        let name = fields
            .get(&layout.name_key)
            .ok_or_else(|| DocumentError::missing(name_path.as_str()))?
            .as_str()
            .ok_or_else(|| DocumentError::invalid(name_path.as_str(), "a string"))?;

        let engine_path = format!("{}.{}", path, layout.storage_engine_key);
        let engine = fields
            .get(&layout.storage_engine_key)
            .ok_or_else(|| DocumentError::missing(engine_path.as_str()))?;
        let storage_engine = StorageEngineDescriptor::from_value(engine, &engine_path, layout)?;

        Ok(Self {
            name,
            storage_engine,
            fields,
        })
    }

    /// Any other field of the entry, unexamined
    pub fn field(&self, key: &str) -> Option<&'a JsonValue> {
        self.fields.get(key)
    }
}

/// Storage engine of one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEngineDescriptor<'a> {
    pub engine_type: &'a str,
    /// Present only for device-backed engines
    pub devices: Option<Vec<&'a str>>,
}

impl<'a> StorageEngineDescriptor<'a> {
    /// Descriptor of an engine that carries no device list
    pub fn new(engine_type: &'a str) -> Self {
        Self {
            engine_type,
            devices: None,
        }
    }

    /// Descriptor of a device-backed engine
    pub fn with_devices(engine_type: &'a str, devices: Vec<&'a str>) -> Self {
        Self {
            engine_type,
            devices: Some(devices),
        }
    }

    /// Device list, empty for engines without one
    pub fn device_list(&self) -> &[&'a str] {
        self.devices.as_deref().unwrap_or(&[])
    }

    fn from_value(value: &'a JsonValue, path: &str, layout: &DocumentLayout) -> DocumentResult<Self> {
        // `storage-engine: memory` shorthand
        if let Some(engine_type) = value.as_str() {
            return Ok(Self::new(engine_type));
        }

        let engine = value
            .as_object()
            .ok_or_else(|| DocumentError::invalid(path, "an object or a string"))?;

        let type_path = format!("{}.{}", path, layout.type_key);
        let engine_type = engine
            .get(&layout.type_key)
            .ok_or_else(|| DocumentError::missing(type_path.as_str()))?
            .as_str()
            .ok_or_else(|| DocumentError::invalid(type_path.as_str(), "a string"))?;

        if engine_type != layout.device_engine_type {
            return Ok(Self::new(engine_type));
        }

        let devices_path = format!("{}.{}", path, layout.devices_key);
        let devices = match engine.get(&layout.devices_key) {
            None | Some(JsonValue::Null) => Vec::new(),
            Some(JsonValue::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.as_str().ok_or_else(|| {
                        DocumentError::invalid(format!("{}[{}]", devices_path, index), "a string")
                    })
                })
                .collect::<DocumentResult<Vec<_>>>()?,
            Some(_) => return Err(DocumentError::invalid(devices_path, "an array")),
        };

        Ok(Self::with_devices(engine_type, devices))
    }
}
