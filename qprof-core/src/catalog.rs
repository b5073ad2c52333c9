//! Rule catalog contract and the in-memory implementation.

use std::collections::HashMap;

use crate::types::{RuleKey, RuleMetadata};

/// Lookup surface of the rule catalog collaborator. The activation
/// engine resolves every requested rule through this before touching
/// storage.
pub trait RuleCatalog: Send + Sync {
    /// Resolve a rule key to its catalog metadata.
    fn find_by_key(&self, key: &RuleKey) -> Option<&RuleMetadata>;
}

/// Catalog backed by a fixed in-memory rule set.
pub struct StaticCatalog {
    rules: HashMap<RuleKey, RuleMetadata>,
}

impl StaticCatalog {
    pub fn new(rules: Vec<RuleMetadata>) -> Self {
        Self {
            rules: rules.into_iter().map(|r| (r.key.clone(), r)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleCatalog for StaticCatalog {
    fn find_by_key(&self, key: &RuleKey) -> Option<&RuleMetadata> {
        self.rules.get(key)
    }
}
