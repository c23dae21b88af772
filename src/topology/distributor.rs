//! Rack size distribution
//!
//! Splits the cluster size across racks. Pinned racks get exactly their
//! pinned size; the rest is divided evenly over the unpinned racks, and the
//! remainder goes one member at a time to the earliest unpinned racks in
//! input order. The result depends only on the input, so every
//! reconciliation pass computes the same placement.

use super::error::{DistributionError, DistributionResult};
use super::rack::{Rack, RackState};
use log::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct RackSizeDistributor;

impl RackSizeDistributor {
    /// Compute one [`RackState`] per rack, in input order.
    ///
    /// The returned sizes always sum to `total_size`.
    pub fn distribute(total_size: usize, racks: &[Rack]) -> DistributionResult<Vec<RackState>> {
        if racks.is_empty() {
            if total_size == 0 {
                return Ok(Vec::new());
            }
            return Err(DistributionError::NoRacksConfigured { total: total_size });
        }

        // A pin sum past usize::MAX is reported as reserving usize::MAX
        let reserved = racks
            .iter()
            .filter_map(|rack| rack.pinned_size)
            .try_fold(0usize, |sum, size| sum.checked_add(size));
        let reserved = match reserved {
            Some(reserved) if reserved <= total_size => reserved,
            reserved => {
                return Err(DistributionError::OverAllocated {
                    reserved: reserved.unwrap_or(usize::MAX),
                    total: total_size,
                });
            }
        };

        let remaining = total_size - reserved;
        let flexible = racks.iter().filter(|rack| !rack.is_pinned()).count();
        if flexible == 0 && remaining != 0 {
            return Err(DistributionError::SizeMismatch {
                pinned: reserved,
                total: total_size,
            });
        }

        let (base, extra) = match flexible {
            0 => (0, 0),
            n => (remaining / n, remaining % n),
        };

        let mut flexible_seen = 0;
        let states: Vec<RackState> = racks
            .iter()
            .map(|rack| {
                let size = match rack.pinned_size {
                    Some(size) => size,
                    None => {
                        let size = if flexible_seen < extra { base + 1 } else { base };
                        flexible_seen += 1;
                        size
                    }
                };
                RackState { rack: *rack, size }
            })
            .collect();

        debug!(
            "Distributed cluster size {} over {} rack(s): {:?}",
            total_size,
            states.len(),
            states
                .iter()
                .map(|state| (state.rack.id, state.size))
                .collect::<Vec<_>>()
        );
        Ok(states)
    }
}

/// Compute the target size of every rack for a cluster of `total_size`.
pub fn compute_rack_sizes(total_size: usize, racks: &[Rack]) -> DistributionResult<Vec<RackState>> {
    RackSizeDistributor::distribute(total_size, racks)
}
