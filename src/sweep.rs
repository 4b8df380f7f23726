use std::ops::RangeInclusive;

use lutmorton::{denormalize, normalize, KeyError, MAX_COORDINATE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::round_trip::{round_trip, RoundTrip, Verdict};

/// Pairs checked by every sweep regardless of seed.
pub const BOUNDARY_COORDINATES: [(u16, u16); 8] = [
    (0, 0),
    (MAX_COORDINATE, MAX_COORDINATE),
    (MAX_COORDINATE, 0),
    (0, MAX_COORDINATE),
    (1, 0),
    (0, 1),
    (MAX_COORDINATE / 2, MAX_COORDINATE / 2 + 1),
    (44700, 18),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    pub seed: u64,
    pub samples: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            seed: 42,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    pub checked: usize,
    pub failures: Vec<RoundTrip>,
}

impl SweepReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The same `seed` always yields the same pairs.
pub fn sample_coordinates(seed: u64, count: usize) -> Vec<(u16, u16)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count).map(|_| (rng.gen(), rng.gen())).collect()
}

/// Runs [`round_trip`] over the boundary pairs plus `config.samples` seeded
/// pairs, in parallel.
pub fn sweep(config: &SweepConfig) -> Result<SweepReport, KeyError> {
    let mut pairs = BOUNDARY_COORDINATES.to_vec();
    pairs.extend(sample_coordinates(config.seed, config.samples));

    let trips = pairs
        .par_iter()
        .map(|&(x, y)| round_trip(x, y))
        .collect::<Result<Vec<_>, _>>()?;

    let checked = trips.len();
    let mut failures: Vec<RoundTrip> = trips
        .into_iter()
        .filter(|trip| trip.verdict == Verdict::Ko)
        .collect();

    failures.sort_by_key(|trip| trip.code);

    for trip in &failures {
        log::warn!(
            "({}, {}) came back as {:?} via key {}",
            trip.x,
            trip.y,
            trip.decoded,
            trip.key
        );
    }

    Ok(SweepReport { checked, failures })
}

/// Checks `denormalize(normalize(code)) == code` for all 2^32 codes and
/// returns how many do not come back.
pub fn exhaustive_key_check() -> u64 {
    key_check(0..=u32::MAX)
}

/// Number of codes in `codes` that `denormalize(normalize(code))` does not
/// give back.
pub fn key_check(codes: RangeInclusive<u32>) -> u64 {
    codes
        .into_par_iter()
        .filter(|&code| denormalize(normalize(code)) != code)
        .count() as u64
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn key_check_covers_the_top_codes() {
        assert_eq!(key_check((u32::MAX - 0xFFFF)..=u32::MAX), 0);
        assert_eq!(key_check(0..=0xFFFF), 0);
        assert_eq!(key_check(7..=7), 0);
    }

    #[test]
    pub fn samples_are_deterministic() {
        let first = sample_coordinates(7, 64);

        assert_eq!(first.len(), 64);
        assert_eq!(first, sample_coordinates(7, 64));
        assert_ne!(first, sample_coordinates(8, 64));
    }

    #[test]
    pub fn default_sweep_passes() {
        let report = sweep(&SweepConfig::default()).unwrap();

        assert_eq!(report.checked, BOUNDARY_COORDINATES.len() + 10_000);
        assert!(report.passed(), "{:?}", report.failures);
    }

    #[test]
    pub fn empty_sweep_still_checks_boundaries() {
        let report = sweep(&SweepConfig {
            seed: 0,
            samples: 0,
        })
        .unwrap();

        assert_eq!(report.checked, BOUNDARY_COORDINATES.len());
        assert!(report.passed());

        assert!(BOUNDARY_COORDINATES.contains(&(65535, 65535)));
        assert!(BOUNDARY_COORDINATES.contains(&(32767, 32768)));
    }
}
