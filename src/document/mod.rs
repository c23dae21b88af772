//! Configuration Document Module
//!
//! Typed, read-only view over the open server configuration document.
//!
//! # Architecture
//!
//! - `config_document.rs` - Accessor (ConfigDocument, NamespaceEntry, StorageEngineDescriptor)
//! - `layout.rs` - Key names the accessor reads (DocumentLayout)
//! - `error.rs` - Document shape errors

mod config_document;
mod error;
mod layout;

pub use config_document::{ConfigDocument, NamespaceEntry, StorageEngineDescriptor};
pub use error::{DocumentError, DocumentResult};
pub use layout::DocumentLayout;
