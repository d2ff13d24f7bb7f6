//! Criterion benchmarking suite for callpath
//!
//! The actual benchmarks live under `benches/`; this crate only re-exports
//! the core types they exercise.

pub use callpath_core::{
    BenchmarkHarness, CallStrategy, Error, HarnessConfig, Operation, Result, Scenario,
};
