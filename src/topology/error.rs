use thiserror::Error;

pub type DistributionResult<T> = Result<T, DistributionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    #[error("Pinned rack sizes reserve {reserved} members but the cluster size is {total}")]
    OverAllocated { reserved: usize, total: usize },

    #[error(
        "Pinned rack sizes add up to {pinned} but the cluster size is {total} and no rack is left to absorb the difference"
    )]
    SizeMismatch { pinned: usize, total: usize },

    #[error("Cluster size is {total} but no racks are configured")]
    NoRacksConfigured { total: usize },

    #[error("Rack id {0} appears more than once")]
    DuplicateRackId(u32),

    #[error("Rack id {id} is out of range (expected 1..={max})")]
    InvalidRackId { id: u32, max: u32 },
}
