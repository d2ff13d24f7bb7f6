//! # callpath-core
//!
//! Core types for the callpath micro-benchmark: it measures the relative
//! latency of invoking a method on an object reached through a lookup-by-key
//! structure, comparing lookup-per-call against a reference cached once at
//! construction, in five dispatch variants.
//!
//! Not a general benchmarking framework; it targets exactly the
//! lookup-and-call comparison pattern.

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod fixture;
pub mod harness;
pub mod report;
pub mod strategy;
pub mod table;
pub mod target;

pub use error::{Error, Result};
pub use fixture::FixtureConfig;
pub use harness::{BenchmarkHarness, HarnessConfig, Operation, Scenario};
pub use report::{Measurement, TIME_UNIT};
pub use strategy::{CallStrategy, Direct, DirectMut, DirectNoInline, ViaLookup, ViaWrappedLookup};
pub use table::{LookupTable, TableHandle, TableWrapper, TargetHandle};
pub use target::{DEFAULT_CAPACITY, Target};
