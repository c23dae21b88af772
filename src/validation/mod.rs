//! Storage-mutation admission
//!
//! Rejects configuration updates that would reuse, remove or re-type the
//! storage of a running cluster.
//!
//! # Architecture
//!
//! - `validator.rs` - Entry point (NamespaceConfigValidator)
//! - `rules.rs` - Per-namespace rule trait (Chain of Responsibility)
//! - `storage_engine.rs` - Storage engine diff rule
//! - `device_uniqueness.rs` - Document-wide device uniqueness check
//! - `error.rs` - Admission errors

mod device_uniqueness;
mod error;
mod rules;
mod storage_engine;
mod validator;

pub use device_uniqueness::GlobalDeviceUniquenessChecker;
pub use error::{DiffError, DiffResult};
pub use rules::NamespaceRule;
pub use storage_engine::StorageEngineDiffChecker;
pub use validator::{NamespaceConfigValidator, validate_configuration_update};
