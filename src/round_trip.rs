use std::fmt;

use debug_logs::debug_print;
use lutmorton::{decode, morton, normalize, KeyError, NormalizedKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Ko,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => f.write_str("OK"),
            Verdict::Ko => f.write_str("KO"),
        }
    }
}

/// One coordinate pair taken through the transport form and back.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    pub x: u16,
    pub y: u16,
    pub code: u32,
    pub key: NormalizedKey,
    pub decoded: (u16, u16),
    pub verdict: Verdict,
}

/// Encodes `(x, y)`, prints the key, parses the printed text back and
/// decodes it. The verdict is `OK` only if the original pair comes back.
pub fn round_trip(x: u16, y: u16) -> Result<RoundTrip, KeyError> {
    let code = morton(x, y);
    let key = normalize(code);

    let transported: NormalizedKey = key.to_string().parse()?;
    let decoded = debug_print!(decode(transported));

    let verdict = if decoded == (x, y) {
        Verdict::Ok
    } else {
        Verdict::Ko
    };

    Ok(RoundTrip {
        x,
        y,
        code,
        key,
        decoded,
        verdict,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn reported_scenario() {
        let trip = round_trip(44700, 18).unwrap();

        assert_eq!(trip.decoded, (44700, 18));
        assert_eq!(trip.verdict, Verdict::Ok);
        assert_eq!(trip.verdict.to_string(), "OK");
        assert_eq!(trip.code, morton(44700, 18));
    }

    #[test]
    pub fn boundaries() {
        for (x, y, code) in [
            (0, 0, 0),
            (65535, 65535, 0xFFFF_FFFF),
            (65535, 0, 0x5555_5555),
            (0, 65535, 0xAAAA_AAAA),
        ] {
            let trip = round_trip(x, y).unwrap();

            assert_eq!(trip.code, code);
            assert_eq!(trip.verdict, Verdict::Ok);
        }

        assert_eq!(round_trip(0, 0).unwrap().key.value(), 0.0);
        assert_eq!(round_trip(65535, 65535).unwrap().key.value(), 1.0);
    }

    #[test]
    pub fn ko_is_printed() {
        assert_eq!(Verdict::Ko.to_string(), "KO");
    }
}
