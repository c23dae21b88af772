use super::distributor::RackSizeDistributor;
use super::error::{DistributionError, DistributionResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Rack id used for the implicit rack of a cluster without rack config
pub const DEFAULT_RACK_ID: u32 = 0;

/// Largest rack id an operator may configure
pub const MAX_RACK_ID: u32 = 1_000_000;

/// An operator-defined failure domain.
///
/// `pinned_size: Some(n)` fixes the rack at exactly `n` members, including
/// zero. `None` lets the rack share whatever the pinned racks leave over.
///
/// In JSON, `pinnedSize` is read as-is. The older `size` key keeps its zero
/// means unpinned meaning (see [`Rack::from_legacy_size`]) and loses to
/// `pinnedSize` when both are present.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", from = "RackRepr")]
pub struct Rack {
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_size: Option<usize>,
}

/// Wire shape of a rack, accepting both the current and the legacy size key
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RackRepr {
    id: u32,
    #[serde(default)]
    pinned_size: Option<usize>,
    #[serde(default)]
    size: Option<usize>,
}

impl From<RackRepr> for Rack {
    fn from(repr: RackRepr) -> Self {
        match (repr.pinned_size, repr.size) {
            (Some(size), _) => Rack::pinned(repr.id, size),
            (None, Some(size)) => Rack::from_legacy_size(repr.id, size),
            (None, None) => Rack::new(repr.id),
        }
    }
}

impl Rack {
    /// Rack that takes part in even distribution
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pinned_size: None,
        }
    }

    /// Rack with an exact member count
    pub fn pinned(id: u32, size: usize) -> Self {
        Self {
            id,
            pinned_size: Some(size),
        }
    }

    /// Rack from a size field where zero means "not pinned".
    ///
    /// Older rack configs cannot express an explicitly empty rack; use this
    /// only when reading such a config.
    pub fn from_legacy_size(id: u32, size: usize) -> Self {
        Self {
            id,
            pinned_size: (size != 0).then_some(size),
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_size.is_some()
    }
}

/// Target member count of one rack
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RackState {
    pub rack: Rack,
    pub size: usize,
}

/// Lookups over a computed distribution
pub trait RackStatesExt {
    /// Size assigned to a rack id
    fn size_of(&self, rack_id: u32) -> Option<usize>;

    /// Sum of all rack sizes
    fn total(&self) -> usize;
}

impl RackStatesExt for [RackState] {
    fn size_of(&self, rack_id: u32) -> Option<usize> {
        self.iter()
            .find(|state| state.rack.id == rack_id)
            .map(|state| state.size)
    }

    fn total(&self) -> usize {
        self.iter().map(|state| state.size).sum()
    }
}

/// Desired topology of a cluster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterTopologySpec {
    pub total_size: usize,
    #[serde(default)]
    pub racks: Vec<Rack>,
}

impl ClusterTopologySpec {
    pub fn new(total_size: usize, racks: Vec<Rack>) -> Self {
        Self { total_size, racks }
    }

    /// Validates the rack list.
    ///
    /// Checks for:
    /// - rack ids within `1..=MAX_RACK_ID`,
    /// - rack ids appearing at most once.
    pub fn validate(&self) -> DistributionResult<()> {
        let mut seen = HashSet::new();
        for rack in &self.racks {
            if rack.id == DEFAULT_RACK_ID || rack.id > MAX_RACK_ID {
                return Err(DistributionError::InvalidRackId {
                    id: rack.id,
                    max: MAX_RACK_ID,
                });
            }
            if !seen.insert(rack.id) {
                return Err(DistributionError::DuplicateRackId(rack.id));
            }
        }
        Ok(())
    }

    /// Validate the rack list, then distribute the cluster size over it.
    pub fn rack_states(&self) -> DistributionResult<Vec<RackState>> {
        self.validate()?;
        RackSizeDistributor::distribute(self.total_size, &self.racks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_zero_size_means_unpinned() {
        assert_eq!(Rack::from_legacy_size(1, 0), Rack::new(1));
        assert_eq!(Rack::from_legacy_size(1, 3), Rack::pinned(1, 3));
        assert!(Rack::pinned(2, 0).is_pinned());
    }

    #[test]
    fn test_rack_json_shapes() {
        let racks: Vec<Rack> =
            serde_json::from_str(r#"[{"id": 1}, {"id": 2, "size": 3}, {"id": 3, "pinnedSize": 0}]"#)
                .unwrap();
        assert_eq!(racks, vec![Rack::new(1), Rack::pinned(2, 3), Rack::pinned(3, 0)]);

        let encoded = serde_json::to_value(Rack::pinned(5, 0)).unwrap();
        assert_eq!(encoded, serde_json::json!({ "id": 5, "pinnedSize": 0 }));
        let decoded: Rack = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, Rack::pinned(5, 0));

        let encoded = serde_json::to_value(Rack::new(4)).unwrap();
        assert_eq!(encoded, serde_json::json!({ "id": 4 }));
    }

    #[test]
    fn test_legacy_size_key_zero_means_unpinned() {
        let racks: Vec<Rack> =
            serde_json::from_str(r#"[{"id": 1, "size": 0}, {"id": 2}]"#).unwrap();
        assert_eq!(racks, vec![Rack::new(1), Rack::new(2)]);

        let spec = ClusterTopologySpec::new(4, racks);
        let sizes: Vec<usize> = spec.rack_states().unwrap().iter().map(|state| state.size).collect();
        assert_eq!(sizes, vec![2, 2]);

        let rack: Rack = serde_json::from_str(r#"{"id": 3, "size": 0, "pinnedSize": 0}"#).unwrap();
        assert_eq!(rack, Rack::pinned(3, 0));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let spec = ClusterTopologySpec::new(3, vec![Rack::new(1), Rack::new(2), Rack::new(1)]);
        assert_eq!(spec.validate(), Err(DistributionError::DuplicateRackId(1)));
    }

    #[test]
    fn test_validate_rejects_reserved_and_oversized_ids() {
        let spec = ClusterTopologySpec::new(1, vec![Rack::new(DEFAULT_RACK_ID)]);
        assert!(matches!(
            spec.validate(),
            Err(DistributionError::InvalidRackId { id: 0, .. })
        ));

        let spec = ClusterTopologySpec::new(1, vec![Rack::new(MAX_RACK_ID + 1)]);
        assert!(matches!(
            spec.validate(),
            Err(DistributionError::InvalidRackId { .. })
        ));

        let spec = ClusterTopologySpec::new(1, vec![Rack::new(MAX_RACK_ID)]);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_rack_states_validates_first() {
        let spec = ClusterTopologySpec::new(100, vec![Rack::pinned(1, 1), Rack::pinned(1, 1)]);
        assert_eq!(spec.rack_states(), Err(DistributionError::DuplicateRackId(1)));
    }

    #[test]
    fn test_lookup_helpers() {
        let spec = ClusterTopologySpec::new(5, vec![Rack::new(1), Rack::new(2)]);
        let states = spec.rack_states().unwrap();
        assert_eq!(states.size_of(1), Some(3));
        assert_eq!(states.size_of(2), Some(2));
        assert_eq!(states.size_of(9), None);
        assert_eq!(states.total(), 5);
    }
}
