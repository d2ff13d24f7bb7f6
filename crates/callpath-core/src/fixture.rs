//! Random fixture data for benchmark runs
//!
//! Fixture strings are only ever passed as call arguments; their content is
//! never inspected, so short random alphabetic strings are enough.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Shape of the fixture sequence generated at setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Number of strings in the sequence
    pub count: usize,
    /// Length of each string
    pub string_len: usize,
    /// Optional deterministic seed
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            count: 5,
            string_len: 3,
            seed: None,
        }
    }
}

impl FixtureConfig {
    /// Fixture config with a deterministic seed and default shape
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// Generate the fixture sequence described by `config`
///
/// Fails with [`Error::RandomGeneration`] when asked for zero strings or
/// zero-length strings, since either would make the measured loop vacuous.
pub fn generate(config: &FixtureConfig) -> Result<Vec<String>> {
    if config.count == 0 {
        return Err(Error::random_generation("fixture count must be non-zero"));
    }
    if config.string_len == 0 {
        return Err(Error::random_generation(
            "fixture string length must be non-zero",
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut fixture = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let s: String = (0..config.string_len)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect();
        fixture.push(s);
    }
    Ok(fixture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let fixture = generate(&FixtureConfig::default()).unwrap();
        assert_eq!(fixture.len(), 5);
        for s in &fixture {
            assert_eq!(s.len(), 3);
            assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate(&FixtureConfig::seeded(42)).unwrap();
        let b = generate(&FixtureConfig::seeded(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count_rejected() {
        let config = FixtureConfig {
            count: 0,
            ..FixtureConfig::default()
        };
        assert!(matches!(
            generate(&config),
            Err(Error::RandomGeneration(_))
        ));
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = FixtureConfig {
            string_len: 0,
            ..FixtureConfig::default()
        };
        assert!(matches!(
            generate(&config),
            Err(Error::RandomGeneration(_))
        ));
    }
}
