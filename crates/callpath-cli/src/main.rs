//! Command-line runner for the callpath benchmark
//!
//! Selects operations, configures repetition counts and prints one report
//! line per operation to stdout: `<name> <mean> <unit>`. Progress and errors
//! go to the tracing subscriber, never into the report stream.

use clap::Parser;
use tracing::{error, info};

use callpath_core::{BenchmarkHarness, FixtureConfig, HarnessConfig, Operation};

/// Measure lookup-per-call vs cached-reference dispatch latency
#[derive(Debug, Parser)]
#[command(name = "callpath", version, about)]
struct Cli {
    /// Operations to measure; all five when omitted
    #[arg(value_enum)]
    ops: Vec<Operation>,

    /// Discarded warmup repetitions per operation (zero for no warmup)
    #[arg(short, long, default_value_t = 3)]
    warmup: u32,

    /// Measured repetitions per operation
    #[arg(short, long, default_value_t = 5)]
    iterations: u32,

    /// Deterministic fixture seed; random fixture when omitted
    #[arg(short, long)]
    seed: Option<u64>,
}

fn run(cli: Cli) -> callpath_core::Result<()> {
    let ops = if cli.ops.is_empty() {
        Operation::ALL.to_vec()
    } else {
        cli.ops
    };

    let fixture = match cli.seed {
        Some(seed) => FixtureConfig::seeded(seed),
        None => FixtureConfig::default(),
    };

    let harness = BenchmarkHarness::new(HarnessConfig {
        warmup: cli.warmup,
        iterations: cli.iterations,
        fixture,
        ..HarnessConfig::default()
    })?;

    info!(operations = ops.len(), "starting benchmark run");

    // Each operation gets fully fresh state inside the harness; running them
    // sequentially keeps no warmed-up context shared between strategies.
    for op in ops {
        let measurement = harness.run_operation(op)?;
        println!("{measurement}");
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("benchmark run failed: {e}");
        std::process::exit(1);
    }
}
