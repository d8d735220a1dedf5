//! Timestamp precision and its wire short codes.

use std::str::FromStr;

use crate::InfluxError;

/// Timestamp resolution for a write.
///
/// Nanoseconds is the protocol default and is never written to the query
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

// Single source of truth for both encode and decode.
const SHORT_CODES: [(Precision, &str); 6] = [
    (Precision::Nanoseconds, "n"),
    (Precision::Microseconds, "u"),
    (Precision::Milliseconds, "ms"),
    (Precision::Seconds, "s"),
    (Precision::Minutes, "m"),
    (Precision::Hours, "h"),
];

impl Precision {
    /// The short code used in the write url query string.
    pub fn as_code(self) -> &'static str {
        for &(precision, code) in SHORT_CODES.iter() {
            if precision == self {
                return code;
            }
        }
        unreachable!("short code table covers every precision")
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Nanoseconds
    }
}

impl FromStr for Precision {
    type Err = InfluxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SHORT_CODES
            .iter()
            .find(|(_, code)| *code == s)
            .map(|(precision, _)| *precision)
            .ok_or_else(|| InfluxError::InvalidPrecision(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Precision; 6] = [
        Precision::Nanoseconds,
        Precision::Microseconds,
        Precision::Milliseconds,
        Precision::Seconds,
        Precision::Minutes,
        Precision::Hours,
    ];

    #[test]
    fn short_codes_are_a_bijection() {
        for precision in ALL.iter() {
            assert_eq!(precision.as_code().parse::<Precision>(), Ok(*precision));
        }
        for (_, code) in SHORT_CODES.iter() {
            assert_eq!(code.parse::<Precision>().map(Precision::as_code), Ok(*code));
        }
    }

    #[test]
    fn codes_match_the_protocol() {
        assert_eq!(Precision::Nanoseconds.as_code(), "n");
        assert_eq!(Precision::Microseconds.as_code(), "u");
        assert_eq!(Precision::Milliseconds.as_code(), "ms");
        assert_eq!(Precision::Seconds.as_code(), "s");
        assert_eq!(Precision::Minutes.as_code(), "m");
        assert_eq!(Precision::Hours.as_code(), "h");
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert_eq!(
            "x".parse::<Precision>(),
            Err(InfluxError::InvalidPrecision("x".to_owned()))
        );
        assert_eq!(
            "".parse::<Precision>(),
            Err(InfluxError::InvalidPrecision(String::new()))
        );
    }

    #[test]
    fn default_is_nanoseconds() {
        assert_eq!(Precision::default(), Precision::Nanoseconds);
    }
}
