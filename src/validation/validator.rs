//! Namespace configuration validator
//!
//! Entry point of the admission path. Decides whether a proposed
//! configuration document may replace the current one on a running
//! cluster. Per-namespace rules run first for every namespace that exists
//! in both documents, then the document-wide device uniqueness check runs
//! on the proposed document. The first violation is returned.

use super::device_uniqueness::GlobalDeviceUniquenessChecker;
use super::error::DiffResult;
use super::rules::NamespaceRule;
use super::storage_engine::StorageEngineDiffChecker;
use crate::document::{ConfigDocument, DocumentLayout};
use log::{debug, warn};
use std::collections::HashMap;

pub struct NamespaceConfigValidator {
    layout: DocumentLayout,
    rules: Vec<Box<dyn NamespaceRule>>,
    uniqueness: GlobalDeviceUniquenessChecker,
}

impl NamespaceConfigValidator {
    /// Create validator with the default layout and rules
    pub fn new() -> Self {
        Self::with_layout(DocumentLayout::default())
    }

    /// Create validator for a custom document layout
    pub fn with_layout(layout: DocumentLayout) -> Self {
        let rules: Vec<Box<dyn NamespaceRule>> =
            vec![Box::new(StorageEngineDiffChecker::with_layout(&layout))];
        Self::with_rules(layout, rules)
    }

    /// Create validator with custom per-namespace rules.
    ///
    /// Device uniqueness across the proposed document is always enforced.
    pub fn with_rules(layout: DocumentLayout, rules: Vec<Box<dyn NamespaceRule>>) -> Self {
        Self {
            uniqueness: GlobalDeviceUniquenessChecker::with_layout(layout.clone()),
            layout,
            rules,
        }
    }

    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }

    /// Validate replacing `old` with `new`. Neither document is modified.
    pub fn validate(&self, old: &ConfigDocument, new: &ConfigDocument) -> DiffResult<()> {
        let result = self.run(old, new);
        if let Err(err) = &result {
            warn!("Rejected namespace configuration update: {}", err);
        }
        result
    }

    fn run(&self, old: &ConfigDocument, new: &ConfigDocument) -> DiffResult<()> {
        let old_namespaces = old.namespaces(&self.layout)?;
        let new_namespaces = new.namespaces(&self.layout)?;

        let previous: HashMap<&str, _> = old_namespaces.iter().map(|ns| (ns.name, ns)).collect();

        for namespace in &new_namespaces {
            let Some(old_namespace) = previous.get(namespace.name) else {
                debug!("Namespace '{}' is new, skipping diff rules", namespace.name);
                continue;
            };

            for rule in &self.rules {
                debug!("Applying rule '{}' to namespace '{}'", rule.name(), namespace.name);
                rule.check_namespace(old_namespace, namespace)?;
            }
        }

        self.uniqueness.check_entries(&new_namespaces)
    }
}

impl Default for NamespaceConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a configuration update with the default layout and rules.
pub fn validate_configuration_update(old: &ConfigDocument, new: &ConfigDocument) -> DiffResult<()> {
    NamespaceConfigValidator::new().validate(old, new)
}
