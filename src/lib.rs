pub mod round_trip;
pub mod sweep;

pub use round_trip::{round_trip, RoundTrip, Verdict};
pub use sweep::{exhaustive_key_check, key_check, sample_coordinates, sweep, SweepConfig, SweepReport};
