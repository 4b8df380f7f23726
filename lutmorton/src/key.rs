use std::{fmt, num::ParseFloatError, str::FromStr};

use thiserror::Error;

use crate::{morton, unmorton};

const MAX_CODE: f64 = u32::MAX as f64;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyError {
    #[error("`{text}` is not a number: {source}")]
    NotANumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("key {0} is not finite")]
    NotFinite(f64),
    #[error("key {0} is outside [0, 1]")]
    OutOfRange(f64),
}

/// A Morton code rescaled into `[0, 1]`, the form the code takes outside
/// this crate.
///
/// Backed by an `f64`. Its 53-bit significand distinguishes all 2^32 codes,
/// so [`denormalize`] recovers every code exactly. A representation with
/// fewer than 32 significand bits (`f32` has 24) merges neighbouring codes,
/// and the recovered code is then only accurate to one unit in the last
/// place of that representation.
///
/// The text form has 17 fractional digits, which is enough for any code to
/// survive a print/parse cycle.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NormalizedKey(f64);

impl NormalizedKey {
    pub const MIN: Self = NormalizedKey(0.0);
    pub const MAX: Self = NormalizedKey(1.0);

    pub fn new(value: f64) -> Result<Self, KeyError> {
        if value.is_nan() || value.is_infinite() {
            return Err(KeyError::NotFinite(value));
        }

        if !(0.0..=1.0).contains(&value) {
            return Err(KeyError::OutOfRange(value));
        }

        Ok(NormalizedKey(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.17}", self.0)
    }
}

impl FromStr for NormalizedKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<f64>().map_err(|source| KeyError::NotANumber {
            text: s.to_owned(),
            source,
        })?;

        NormalizedKey::new(value)
    }
}

pub fn normalize(code: u32) -> NormalizedKey {
    NormalizedKey(code as f64 / MAX_CODE)
}

pub fn denormalize(key: NormalizedKey) -> u32 {
    (key.0 * MAX_CODE).round() as u32
}

/// `(x, y)` straight to its transport key.
pub fn encode(x: u16, y: u16) -> NormalizedKey {
    normalize(morton(x, y))
}

pub fn decode(key: NormalizedKey) -> (u16, u16) {
    unmorton(denormalize(key))
}
