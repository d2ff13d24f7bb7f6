//! Key-to-target lookup table and its single-method wrapper

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::Target;

/// Shared handle to a call target
///
/// The benchmark is single-threaded end to end, so shared ownership between
/// the table and the cached-reference strategies uses `Rc<RefCell<_>>`.
pub type TargetHandle = Rc<RefCell<Target>>;

/// Mapping from string keys to call targets
///
/// Lookup-based strategies resolve against this table on every call;
/// direct strategies resolve against it exactly once at construction.
#[derive(Debug, Default)]
pub struct LookupTable {
    targets: HashMap<String, TargetHandle>,
}

impl LookupTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target under a key, replacing any previous entry
    pub fn insert(&mut self, key: impl Into<String>, target: TargetHandle) {
        self.targets.insert(key.into(), target);
    }

    /// Resolve a key to its target handle
    pub fn get(&self, key: &str) -> Option<TargetHandle> {
        self.targets.get(key).cloned()
    }

    /// Number of registered targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if no targets are registered
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Shared handle to a lookup table
pub type TableHandle = Rc<RefCell<LookupTable>>;

/// Indirection layer over [`LookupTable`]
///
/// Exposes exactly one get-by-key operation so the wrapped-lookup strategy
/// pays one extra hop per call compared to the plain lookup strategy.
#[derive(Debug, Clone)]
pub struct TableWrapper {
    table: TableHandle,
}

impl TableWrapper {
    /// Wrap a shared table
    pub fn new(table: TableHandle) -> Self {
        Self { table }
    }

    /// Resolve a key through the wrapped table
    pub fn get_target(&self, key: &str) -> Option<TargetHandle> {
        self.table.borrow().get(key)
    }

    /// Handle to the underlying table, for strategies that bypass the wrapper
    pub fn table_handle(&self) -> TableHandle {
        Rc::clone(&self.table)
    }
}
