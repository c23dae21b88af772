use super::error::DiffResult;
use crate::document::NamespaceEntry;

/// A per-namespace admission rule (Chain of Responsibility)
///
/// Applied to every namespace present in both the current and the proposed
/// document. The first rule to fail rejects the whole update.
pub trait NamespaceRule: Send + Sync {
    /// Short identifier used in log output
    fn name(&self) -> &'static str;

    fn check_namespace(&self, old: &NamespaceEntry<'_>, new: &NamespaceEntry<'_>) -> DiffResult<()>;
}
