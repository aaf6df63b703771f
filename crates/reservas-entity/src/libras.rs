//! Pound quantities.
//!
//! The API sends reserved libras as JSON numbers on some endpoints and as
//! decimal strings on aggregate endpoints. [`Libras`] accepts both; strings
//! that do not parse count as zero.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize};

/// A quantity of pounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Libras(pub f64);

impl Libras {
    /// Zero pounds.
    pub const ZERO: Libras = Libras(0.0);

    /// Parse leniently: surrounding whitespace is ignored and anything that
    /// is not a finite number yields zero.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Self(v),
            _ => Self::ZERO,
        }
    }

    /// Return the inner value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Share of `total` represented by this quantity, in percent.
    pub fn percent_of(self, total: Libras) -> f64 {
        if total.0 <= 0.0 {
            0.0
        } else {
            self.0 / total.0 * 100.0
        }
    }
}

impl fmt::Display for Libras {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Libras {
    type Output = Libras;

    fn add(self, rhs: Libras) -> Libras {
        Libras(self.0 + rhs.0)
    }
}

impl Sum for Libras {
    fn sum<I: Iterator<Item = Libras>>(iter: I) -> Libras {
        iter.fold(Libras::ZERO, Add::add)
    }
}

impl From<f64> for Libras {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for Libras {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
            Null(()),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Libras(v),
            Raw::Text(s) => Libras::parse_lenient(&s),
            Raw::Null(()) => Libras::ZERO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_number_and_string() {
        let values: Vec<Libras> =
            serde_json::from_str(r#"[12.5, "1500.25", "n/a", null]"#).expect("parse");
        assert_eq!(
            values,
            vec![Libras(12.5), Libras(1500.25), Libras::ZERO, Libras::ZERO]
        );
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(Libras(500.0).percent_of(Libras(2000.0)), 25.0);
        assert_eq!(Libras(5.0).percent_of(Libras::ZERO), 0.0);
    }

    #[test]
    fn test_sum() {
        let total: Libras = [Libras(1.5), Libras(2.25)].into_iter().sum();
        assert_eq!(total, Libras(3.75));
    }
}
