// ============================================================================
// RackGuard Library
// ============================================================================

//! Topology-integrity checks for a rack-aware database cluster.
//!
//! Two independent, pure entry points:
//!
//! - [`validate_configuration_update`] decides whether a proposed server
//!   configuration may replace the running one without reusing, removing or
//!   re-typing namespace storage.
//! - [`compute_rack_sizes`] splits the desired cluster size across racks.
//!
//! # Examples
//!
//! ```
//! use rackguard::{ConfigDocument, DiffError, validate_configuration_update};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let old = ConfigDocument::new(json!({
//!     "namespaces": [
//!         { "name": "test", "storage-engine": { "type": "device", "devices": ["/dev/xvdb"] } }
//!     ]
//! }))?;
//! let new = ConfigDocument::new(json!({
//!     "namespaces": [
//!         { "name": "test", "storage-engine": { "type": "device", "devices": ["/dev/xvdc"] } }
//!     ]
//! }))?;
//!
//! let err = validate_configuration_update(&old, &new).unwrap_err();
//! assert!(matches!(err, DiffError::DeviceRemoved { .. }));
//! # Ok(())
//! # }
//! ```
//!
//! ```
//! use rackguard::{Rack, compute_rack_sizes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let racks = [Rack::pinned(1, 1), Rack::new(2), Rack::new(3), Rack::pinned(4, 1)];
//! let sizes: Vec<usize> = compute_rack_sizes(7, &racks)?
//!     .iter()
//!     .map(|state| state.size)
//!     .collect();
//! assert_eq!(sizes, vec![1, 3, 2, 1]);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod topology;
pub mod validation;

pub use document::{ConfigDocument, DocumentError, DocumentLayout, NamespaceEntry, StorageEngineDescriptor};
pub use topology::{
    ClusterTopologySpec, DistributionError, DistributionResult, Rack, RackSizeDistributor,
    RackState, RackStatesExt, compute_rack_sizes,
};
pub use validation::{
    DiffError, DiffResult, GlobalDeviceUniquenessChecker, NamespaceConfigValidator, NamespaceRule,
    StorageEngineDiffChecker, validate_configuration_update,
};
