//! @acp:module "Kind Cache Store"
//! @acp:summary "In-memory context -> name -> kind map"
//! @acp:domain format
//! @acp:layer model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::kind::{self, Kind};

/// Context used when the caller gives a name but no context
pub const ANONYMOUS_CONTEXT: &str = "";

/// @acp:summary "Memo of inferred kinds, never evicted"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCache {
    entries: HashMap<String, HashMap<String, Kind>>,
}

impl KindCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Get the kind stored for a field - O(1) lookup
    pub fn get(&self, context: &str, name: &str) -> Option<&Kind> {
        self.entries.get(context).and_then(|fields| fields.get(name))
    }

    /// Check if a field has a stored kind
    pub fn contains(&self, context: &str, name: &str) -> bool {
        self.get(context, name).is_some()
    }

    /// Store a kind for a field and return it.
    ///
    /// `None` is never stored: the call returns `None` and the field stays
    /// unclassified, so the next lookup infers again.
    pub fn put(&mut self, context: &str, name: &str, kind: Option<Kind>) -> Option<Kind> {
        let kind = kind?;

        tracing::debug!("Caching kind {} for {}.{}", kind, context, name);
        self.entries
            .entry(context.to_string())
            .or_default()
            .insert(name.to_string(), kind.clone());

        Some(kind)
    }

    /// Resolve a kind with the built-in heuristic, see [`KindCache::lookup_or_infer_with`]
    pub fn lookup_or_infer(
        &mut self,
        value: &Value,
        name: Option<&str>,
        context: Option<&str>,
    ) -> Option<Kind> {
        self.lookup_or_infer_with(value, name, context, kind::infer)
    }

    /// Return the cached kind for (context, name), or infer and store it.
    ///
    /// Without a name the cache is bypassed entirely: nothing is looked up
    /// and nothing is stored. An empty name counts as no name.
    pub fn lookup_or_infer_with<F>(
        &mut self,
        value: &Value,
        name: Option<&str>,
        context: Option<&str>,
        infer: F,
    ) -> Option<Kind>
    where
        F: FnOnce(&Value) -> Option<Kind>,
    {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return infer(value);
        };
        let context = context.unwrap_or(ANONYMOUS_CONTEXT);

        if let Some(kind) = self.get(context, name) {
            tracing::debug!("Kind cache hit for {}.{}: {}", context, name, kind);
            return Some(kind.clone());
        }

        tracing::debug!("Kind cache miss for {}.{}", context, name);
        self.put(context, name, infer(value))
    }

    /// Drop every stored kind
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop the stored kinds of one context, returning how many were removed
    pub fn clear_context(&mut self, context: &str) -> usize {
        self.entries
            .remove(context)
            .map(|fields| fields.len())
            .unwrap_or(0)
    }

    /// Number of stored fields across all contexts
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the known contexts
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
