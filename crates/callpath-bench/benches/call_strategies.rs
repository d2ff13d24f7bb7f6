//! Call strategy latency comparison
//!
//! Times one pass over the standard five-element fixture for each of the five
//! dispatch variants. Each variant gets its own scenario so no state carries
//! over between them; the observed log length is fed to `black_box` after
//! every iteration to keep the side effect alive.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use callpath_core::{FixtureConfig, HarnessConfig, Operation, Scenario};

fn bench_config() -> HarnessConfig {
    HarnessConfig {
        // Same fixture in every group run so variants are comparable
        fixture: FixtureConfig::seeded(0xCA11),
        ..HarnessConfig::default()
    }
}

fn benchmark_call_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_and_call");

    for op in Operation::ALL {
        let scenario = Scenario::new(&bench_config()).unwrap();
        let mut strategy = scenario.strategy(op).unwrap();

        group.bench_function(op.name(), |b| {
            b.iter(|| {
                strategy.run(black_box(scenario.fixture())).unwrap();
                black_box(scenario.observed_len());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_call_strategies);

criterion_main!(benches);
