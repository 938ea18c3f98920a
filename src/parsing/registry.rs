//! Run-scoped accumulators for the recursive parse.
//!
//! Both collections preserve insertion order; that order is the emission
//! order and keeps runs deterministic. Because registration is depth-first
//! (a class before its bases), first-seen-wins means the nearest override's
//! signature shadows ancestor declarations of the same name.

use crate::types::FunctionInfo;

/// Insertion-ordered function accumulator with unique names.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    entries: Vec<FunctionInfo>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function unless its name is already present.
    ///
    /// Returns `false` when the name was already registered (the new
    /// entry is discarded).
    pub fn insert_if_absent(&mut self, info: FunctionInfo) -> bool {
        if self.contains(&info.name) {
            return false;
        }
        self.entries.push(info);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionInfo> {
        self.entries.iter()
    }

    /// Consume the registry, yielding functions in registration order.
    pub fn into_functions(self) -> Vec<FunctionInfo> {
        self.entries
    }
}

/// First-seen-ordered, deduplicating set of class names to `#include`.
#[derive(Debug, Default)]
pub struct IncludeSet {
    names: Vec<String>,
}

impl IncludeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward-declared class name. Returns `false` on repeats.
    pub fn insert(&mut self, name: String) -> bool {
        if self.names.iter().any(|n| *n == name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}
