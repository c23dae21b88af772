//! Rack-aware cluster topology
//!
//! # Architecture
//!
//! - `rack.rs` - Racks, rack states and the desired cluster topology
//! - `distributor.rs` - Rack size distribution (RackSizeDistributor)
//! - `error.rs` - Distribution errors

mod distributor;
mod error;
mod rack;

pub use distributor::{RackSizeDistributor, compute_rack_sizes};
pub use error::{DistributionError, DistributionResult};
pub use rack::{ClusterTopologySpec, DEFAULT_RACK_ID, MAX_RACK_ID, Rack, RackState, RackStatesExt};
