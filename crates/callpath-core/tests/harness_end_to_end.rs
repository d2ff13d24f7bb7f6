//! End-to-end harness tests
//!
//! Coverage targets:
//! - Scenario setup builds one target under the configured key
//! - Every operation runs to completion and leaves the expected log
//! - Seeded setup is deterministic in shape
//! - Configuration validation and report format

use callpath_core::{
    BenchmarkHarness, FixtureConfig, HarnessConfig, Operation, Scenario, TIME_UNIT,
};

fn seeded_config() -> HarnessConfig {
    HarnessConfig {
        warmup: 1,
        iterations: 3,
        fixture: FixtureConfig::seeded(7),
        ..HarnessConfig::default()
    }
}

// ============================================================================
// Scenario setup
// ============================================================================

#[test]
fn test_scenario_starts_with_empty_target() {
    let scenario = Scenario::new(&seeded_config()).unwrap();
    assert_eq!(scenario.observed_len(), 0);
    assert_eq!(scenario.fixture().len(), 5);
}

#[test]
fn test_seeded_setup_is_repeatable_in_shape() {
    let a = Scenario::new(&seeded_config()).unwrap();
    let b = Scenario::new(&seeded_config()).unwrap();
    assert_eq!(a.fixture(), b.fixture());
    for s in a.fixture() {
        assert_eq!(s.len(), 3);
        assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
    }
}

#[test]
fn test_single_run_records_fixture_for_every_operation() {
    for op in Operation::ALL {
        let scenario = Scenario::new(&seeded_config()).unwrap();
        let mut strategy = scenario.strategy(op).unwrap();
        strategy.run(scenario.fixture()).unwrap();
        assert_eq!(
            scenario.observed_calls(),
            scenario.fixture(),
            "operation {op} must leave exactly the fixture in the log"
        );
        assert_eq!(scenario.observed_len(), 5);
    }
}

// ============================================================================
// Harness runs and reporting
// ============================================================================

#[test]
fn test_run_reports_one_measurement_per_operation() {
    let harness = BenchmarkHarness::new(seeded_config()).unwrap();
    let measurements = harness.run(&Operation::ALL).unwrap();

    assert_eq!(measurements.len(), 5);
    let names: Vec<&str> = measurements.iter().map(|m| m.name).collect();
    assert_eq!(
        names,
        [
            "via_lookup",
            "via_wrapped_lookup",
            "direct_mut",
            "direct",
            "direct_no_inline"
        ]
    );
    for m in &measurements {
        assert!(m.mean_micros.is_finite());
        assert!(m.mean_micros >= 0.0);
        assert_eq!(m.unit, TIME_UNIT);
    }
}

#[test]
fn test_report_lines_are_script_parseable() {
    let harness = BenchmarkHarness::new(seeded_config()).unwrap();
    let measurement = harness.run_operation(Operation::ViaLookup).unwrap();

    let line = measurement.to_string();
    let fields: Vec<&str> = line.split_whitespace().collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], "via_lookup");
    assert!(fields[1].parse::<f64>().is_ok());
    assert_eq!(fields[2], "us");
}

#[test]
fn test_zero_iterations_never_reach_timing() {
    let config = HarnessConfig {
        iterations: 0,
        ..seeded_config()
    };
    assert!(BenchmarkHarness::new(config).is_err());
}

#[test]
fn test_no_warmup_is_a_valid_configuration() {
    let config = HarnessConfig {
        warmup: 0,
        ..seeded_config()
    };
    let harness = BenchmarkHarness::new(config).unwrap();
    assert!(harness.run_operation(Operation::DirectNoInline).is_ok());
}
