//! The five call strategies under comparison
//!
//! Each strategy binds to the lookup table at construction time and makes its
//! binding mode explicit in the constructor contract: the lookup-based
//! strategies keep a table handle and re-resolve the key on every call, the
//! direct strategies resolve the key exactly once in `new` and cache the
//! resulting handle for their whole lifetime.

use crate::error::{Error, Result};
use crate::table::{TableHandle, TableWrapper, TargetHandle};

/// A named, independently timed way of invoking the target
pub trait CallStrategy {
    /// Stable name used in reports and CLI selection
    fn name(&self) -> &'static str;

    /// Invoke the target once per element of `data`
    fn run(&mut self, data: &[String]) -> Result<()>;
}

/// Re-resolves the key against the table on every single call
#[derive(Debug)]
pub struct ViaLookup {
    table: TableHandle,
    key: String,
}

impl ViaLookup {
    /// Bind to a table; resolution is deferred to each call
    pub fn new(table: TableHandle, key: impl Into<String>) -> Self {
        Self {
            table,
            key: key.into(),
        }
    }
}

impl CallStrategy for ViaLookup {
    fn name(&self) -> &'static str {
        "via_lookup"
    }

    fn run(&mut self, data: &[String]) -> Result<()> {
        for datum in data {
            let target = self
                .table
                .borrow()
                .get(&self.key)
                .ok_or_else(|| Error::missing_target(&self.key))?;
            target.borrow_mut().call(datum.as_str());
        }
        Ok(())
    }
}

/// Like [`ViaLookup`] but every resolution goes through [`TableWrapper`]
#[derive(Debug)]
pub struct ViaWrappedLookup {
    wrapper: TableWrapper,
    key: String,
}

impl ViaWrappedLookup {
    /// Bind to a wrapper; resolution is deferred to each call
    pub fn new(wrapper: TableWrapper, key: impl Into<String>) -> Self {
        Self {
            wrapper,
            key: key.into(),
        }
    }
}

impl CallStrategy for ViaWrappedLookup {
    fn name(&self) -> &'static str {
        "via_wrapped_lookup"
    }

    fn run(&mut self, data: &[String]) -> Result<()> {
        for datum in data {
            let target = self
                .wrapper
                .get_target(&self.key)
                .ok_or_else(|| Error::missing_target(&self.key))?;
            target.borrow_mut().call(datum.as_str());
        }
        Ok(())
    }
}

fn resolve_once(wrapper: &TableWrapper, key: &str) -> Result<TargetHandle> {
    wrapper
        .get_target(key)
        .ok_or_else(|| Error::missing_target(key))
}

/// Cached reference, dispatched through a mutable borrow of the handle
#[derive(Debug)]
pub struct DirectMut {
    target: TargetHandle,
}

impl DirectMut {
    /// Resolve `key` through `wrapper` exactly once; fails if absent
    pub fn new(wrapper: &TableWrapper, key: &str) -> Result<Self> {
        Ok(Self {
            target: resolve_once(wrapper, key)?,
        })
    }
}

impl CallStrategy for DirectMut {
    fn name(&self) -> &'static str {
        "direct_mut"
    }

    fn run(&mut self, data: &[String]) -> Result<()> {
        let target = &mut self.target;
        for datum in data {
            target.borrow_mut().call(datum.as_str());
        }
        Ok(())
    }
}

/// Cached reference, dispatched through an immutable borrow of the handle
#[derive(Debug)]
pub struct Direct {
    target: TargetHandle,
}

impl Direct {
    /// Resolve `key` through `wrapper` exactly once; fails if absent
    pub fn new(wrapper: &TableWrapper, key: &str) -> Result<Self> {
        Ok(Self {
            target: resolve_once(wrapper, key)?,
        })
    }
}

impl CallStrategy for Direct {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn run(&mut self, data: &[String]) -> Result<()> {
        let target = &self.target;
        for datum in data {
            target.borrow_mut().call(datum.as_str());
        }
        Ok(())
    }
}

/// Cached reference with cross-procedure inlining suppressed on the call path
///
/// Isolates the cost of the call instruction itself from shortcuts the
/// optimizer takes once it can see through the call boundary.
#[derive(Debug)]
pub struct DirectNoInline {
    target: TargetHandle,
}

impl DirectNoInline {
    /// Resolve `key` through `wrapper` exactly once; fails if absent
    pub fn new(wrapper: &TableWrapper, key: &str) -> Result<Self> {
        Ok(Self {
            target: resolve_once(wrapper, key)?,
        })
    }
}

impl CallStrategy for DirectNoInline {
    fn name(&self) -> &'static str {
        "direct_no_inline"
    }

    #[inline(never)]
    fn run(&mut self, data: &[String]) -> Result<()> {
        let target = &self.target;
        for datum in data {
            target.borrow_mut().call(datum.as_str());
        }
        Ok(())
    }
}
