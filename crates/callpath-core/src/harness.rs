//! Benchmark harness: isolated setup, warmup and measured repetitions
//!
//! Each operation is measured against its own freshly built scenario so that
//! allocator and optimizer state cannot leak between strategies. Process-level
//! isolation (forked runs) is the caller's concern; the harness guarantees
//! state isolation within one process.

use std::cell::RefCell;
use std::hint::black_box;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::info;

use crate::error::{Error, Result};
use crate::fixture::{self, FixtureConfig};
use crate::report::Measurement;
use crate::strategy::{
    CallStrategy, Direct, DirectMut, DirectNoInline, ViaLookup, ViaWrappedLookup,
};
use crate::table::{LookupTable, TableWrapper, TargetHandle};
use crate::target::{DEFAULT_CAPACITY, Target};

/// The five benchmarked operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Operation {
    /// Lookup in the table on every call
    #[value(name = "via_lookup")]
    ViaLookup,
    /// Lookup through the table wrapper on every call
    #[value(name = "via_wrapped_lookup")]
    ViaWrappedLookup,
    /// Cached reference, mutable-borrow dispatch
    #[value(name = "direct_mut")]
    DirectMut,
    /// Cached reference, immutable-borrow dispatch
    #[value(name = "direct")]
    Direct,
    /// Cached reference with inlining suppressed
    #[value(name = "direct_no_inline")]
    DirectNoInline,
}

impl Operation {
    /// All operations, in reporting order
    pub const ALL: [Operation; 5] = [
        Operation::ViaLookup,
        Operation::ViaWrappedLookup,
        Operation::DirectMut,
        Operation::Direct,
        Operation::DirectNoInline,
    ];

    /// Stable operation name, identical to the strategy's report name
    pub fn name(self) -> &'static str {
        match self {
            Operation::ViaLookup => "via_lookup",
            Operation::ViaWrappedLookup => "via_wrapped_lookup",
            Operation::DirectMut => "direct_mut",
            Operation::Direct => "direct",
            Operation::DirectNoInline => "direct_no_inline",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Harness configuration, validated before any timing begins
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Discarded repetitions before measurement; zero means no warmup
    pub warmup: u32,
    /// Measured repetitions; must be at least one
    pub iterations: u32,
    /// Call log capacity of the target under test
    pub capacity: usize,
    /// Key the single target is registered under
    pub key: String,
    /// Shape of the generated fixture sequence
    pub fixture: FixtureConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            warmup: 3,
            iterations: 5,
            capacity: DEFAULT_CAPACITY,
            key: "KEY".to_string(),
            fixture: FixtureConfig::default(),
        }
    }
}

impl HarnessConfig {
    fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::invalid_configuration(
                "measured repetition count must be at least 1",
            ));
        }
        Ok(())
    }
}

/// One fully isolated measured run: fixture, target, table and wrapper
///
/// Built fresh per operation. Strategies constructed from the same scenario
/// share its single target, which is what makes the observed log length a
/// usable dead-code sink.
pub struct Scenario {
    fixture: Vec<String>,
    target: TargetHandle,
    wrapper: TableWrapper,
    key: String,
}

impl Scenario {
    /// Generate fixture data and register one target under the config key
    pub fn new(config: &HarnessConfig) -> Result<Self> {
        let fixture = fixture::generate(&config.fixture)?;

        let target: TargetHandle = Rc::new(RefCell::new(Target::new(config.capacity)));
        let mut table = LookupTable::new();
        table.insert(config.key.clone(), Rc::clone(&target));
        let wrapper = TableWrapper::new(Rc::new(RefCell::new(table)));

        Ok(Self {
            fixture,
            target,
            wrapper,
            key: config.key.clone(),
        })
    }

    /// Construct the strategy for `op`, bound to this scenario's table
    ///
    /// Direct variants resolve the key here, exactly once.
    pub fn strategy(&self, op: Operation) -> Result<Box<dyn CallStrategy>> {
        Ok(match op {
            Operation::ViaLookup => Box::new(ViaLookup::new(
                self.wrapper.table_handle(),
                self.key.clone(),
            )),
            Operation::ViaWrappedLookup => {
                Box::new(ViaWrappedLookup::new(self.wrapper.clone(), self.key.clone()))
            }
            Operation::DirectMut => Box::new(DirectMut::new(&self.wrapper, &self.key)?),
            Operation::Direct => Box::new(Direct::new(&self.wrapper, &self.key)?),
            Operation::DirectNoInline => {
                Box::new(DirectNoInline::new(&self.wrapper, &self.key)?)
            }
        })
    }

    /// Call arguments for this run
    pub fn fixture(&self) -> &[String] {
        &self.fixture
    }

    /// Current log length of the scenario's target
    ///
    /// Consumers must pass this through `black_box` after every repetition to
    /// keep the benchmarked side effect observable.
    pub fn observed_len(&self) -> usize {
        self.target.borrow().len()
    }

    /// Arguments recorded by the scenario's target so far
    pub fn observed_calls(&self) -> Vec<String> {
        self.target.borrow().calls().to_vec()
    }
}

/// Runs selected operations under identical conditions and reports mean µs
pub struct BenchmarkHarness {
    config: HarnessConfig,
}

impl BenchmarkHarness {
    /// Create a harness, rejecting invalid repetition counts up front
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run every operation in `ops`, each against a fresh scenario
    pub fn run(&self, ops: &[Operation]) -> Result<Vec<Measurement>> {
        if ops.is_empty() {
            return Err(Error::invalid_configuration("no operations selected"));
        }
        ops.iter().map(|op| self.run_operation(*op)).collect()
    }

    /// Measure a single operation and report its mean time per repetition
    pub fn run_operation(&self, op: Operation) -> Result<Measurement> {
        let scenario = Scenario::new(&self.config)?;
        let mut strategy = scenario.strategy(op)?;

        info!(
            operation = %op,
            warmup = self.config.warmup,
            iterations = self.config.iterations,
            "measuring"
        );

        for _ in 0..self.config.warmup {
            strategy.run(scenario.fixture())?;
            black_box(scenario.observed_len());
        }

        let mut total = Duration::ZERO;
        for _ in 0..self.config.iterations {
            let start = Instant::now();
            strategy.run(scenario.fixture())?;
            total += start.elapsed();
            black_box(scenario.observed_len());
        }

        let mean_micros = total.as_secs_f64() * 1_000_000.0 / f64::from(self.config.iterations);
        Ok(Measurement::new(strategy.name(), mean_micros))
    }
}
