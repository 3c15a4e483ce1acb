//! Fare amounts.
//!
//! Fares are stored as whole centavos so that totals stay exact: a trip's
//! total is a plain integer sum of its parts, with no binary floating point
//! drift. The JSON tariff documents speak reais (`5.75`); conversion happens
//! at the serde boundary.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a numeric value cannot be used as a fare.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fare amount: {reason}")]
pub struct InvalidFareAmount {
    reason: &'static str,
}

/// A fare amount in centavos of a Brazilian real.
///
/// Amounts are non-negative by construction. A zero amount is meaningful:
/// free services and free at-station integrations both price at
/// [`FareAmount::ZERO`].
///
/// # Examples
///
/// ```
/// use fare_engine::domain::FareAmount;
///
/// let fare = FareAmount::from_reais(5.75).unwrap();
/// assert_eq!(fare.centavos(), 575);
/// assert_eq!(fare.format_br(), "R$ 5,75");
///
/// // Negative values are rejected
/// assert!(FareAmount::from_reais(-1.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FareAmount(u64);

impl FareAmount {
    /// A zero fare (free boarding).
    pub const ZERO: FareAmount = FareAmount(0);

    /// Creates an amount from whole centavos.
    pub const fn from_centavos(centavos: u64) -> Self {
        FareAmount(centavos)
    }

    /// Creates an amount from a value in reais, e.g. `5.75`.
    ///
    /// The value is rounded to the nearest centavo. Negative and non-finite
    /// values are rejected.
    pub fn from_reais(reais: f64) -> Result<Self, InvalidFareAmount> {
        if !reais.is_finite() {
            return Err(InvalidFareAmount {
                reason: "must be a finite number",
            });
        }
        if reais < 0.0 {
            return Err(InvalidFareAmount {
                reason: "must not be negative",
            });
        }
        Ok(FareAmount((reais * 100.0).round() as u64))
    }

    /// Returns the amount in whole centavos.
    pub const fn centavos(&self) -> u64 {
        self.0
    }

    /// Returns the amount as a value in reais.
    pub fn as_reais(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns true for a zero (free) amount.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats the amount as pt-BR currency text, e.g. `R$ 1.234,56`.
    ///
    /// Reais are grouped with dots and centavos follow a decimal comma,
    /// matching how fares are displayed to passengers.
    pub fn format_br(&self) -> String {
        let reais = self.0 / 100;
        let centavos = self.0 % 100;
        format!("R$ {},{:02}", group_thousands(reais), centavos)
    }
}

/// Renders `value` with a dot between each group of three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.bytes().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit as char);
    }
    grouped
}

impl Add for FareAmount {
    type Output = FareAmount;

    fn add(self, rhs: FareAmount) -> FareAmount {
        FareAmount(self.0 + rhs.0)
    }
}

impl AddAssign for FareAmount {
    fn add_assign(&mut self, rhs: FareAmount) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for FareAmount {
    type Output = FareAmount;

    fn mul(self, rhs: u32) -> FareAmount {
        FareAmount(self.0 * u64::from(rhs))
    }
}

impl Sum for FareAmount {
    fn sum<I: Iterator<Item = FareAmount>>(iter: I) -> FareAmount {
        iter.fold(FareAmount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a FareAmount> for FareAmount {
    fn sum<I: Iterator<Item = &'a FareAmount>>(iter: I) -> FareAmount {
        iter.copied().sum()
    }
}

impl fmt::Debug for FareAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FareAmount({}c)", self.0)
    }
}

impl fmt::Display for FareAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_br())
    }
}

impl Serialize for FareAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_reais())
    }
}

impl<'de> Deserialize<'de> for FareAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let reais = f64::deserialize(deserializer)?;
        FareAmount::from_reais(reais).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_reais_rounds_to_nearest_centavo() {
        assert_eq!(FareAmount::from_reais(5.75).unwrap().centavos(), 575);
        assert_eq!(FareAmount::from_reais(2.9).unwrap().centavos(), 290);
        assert_eq!(FareAmount::from_reais(2.15).unwrap().centavos(), 215);
        assert_eq!(FareAmount::from_reais(0.0).unwrap().centavos(), 0);
        assert_eq!(FareAmount::from_reais(0.005).unwrap().centavos(), 1);
    }

    #[test]
    fn from_reais_rejects_negative() {
        assert!(FareAmount::from_reais(-0.01).is_err());
        assert!(FareAmount::from_reais(-5.75).is_err());
    }

    #[test]
    fn from_reais_rejects_non_finite() {
        assert!(FareAmount::from_reais(f64::NAN).is_err());
        assert!(FareAmount::from_reais(f64::INFINITY).is_err());
        assert!(FareAmount::from_reais(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn as_reais_roundtrip() {
        let fare = FareAmount::from_centavos(575);
        assert_eq!(fare.as_reais(), 5.75);
    }

    #[test]
    fn format_br() {
        assert_eq!(FareAmount::ZERO.format_br(), "R$ 0,00");
        assert_eq!(FareAmount::from_centavos(575).format_br(), "R$ 5,75");
        assert_eq!(FareAmount::from_centavos(5).format_br(), "R$ 0,05");
        assert_eq!(FareAmount::from_centavos(123_456).format_br(), "R$ 1.234,56");
        assert_eq!(
            FareAmount::from_centavos(123_456_789).format_br(),
            "R$ 1.234.567,89"
        );
    }

    #[test]
    fn display_matches_format_br() {
        let fare = FareAmount::from_centavos(425);
        assert_eq!(format!("{}", fare), "R$ 4,25");
    }

    #[test]
    fn debug_shows_centavos() {
        let fare = FareAmount::from_centavos(575);
        assert_eq!(format!("{:?}", fare), "FareAmount(575c)");
    }

    #[test]
    fn arithmetic() {
        let a = FareAmount::from_centavos(575);
        let b = FareAmount::from_centavos(215);
        assert_eq!(a + b, FareAmount::from_centavos(790));

        let mut c = FareAmount::ZERO;
        c += a;
        c += b;
        assert_eq!(c, FareAmount::from_centavos(790));

        assert_eq!(a * 5, FareAmount::from_centavos(2875));
        assert_eq!(FareAmount::ZERO * 10, FareAmount::ZERO);
    }

    #[test]
    fn sum_of_amounts() {
        let fares = [
            FareAmount::from_centavos(425),
            FareAmount::from_centavos(360),
            FareAmount::ZERO,
        ];
        let total: FareAmount = fares.iter().sum();
        assert_eq!(total, FareAmount::from_centavos(785));

        let empty: FareAmount = std::iter::empty::<FareAmount>().sum();
        assert_eq!(empty, FareAmount::ZERO);
    }

    #[test]
    fn serde_speaks_reais() {
        let fare: FareAmount = serde_json::from_str("5.75").unwrap();
        assert_eq!(fare.centavos(), 575);

        // Whole-real values deserialize from plain integers too
        let fare: FareAmount = serde_json::from_str("6").unwrap();
        assert_eq!(fare.centavos(), 600);

        assert_eq!(serde_json::to_string(&FareAmount::from_centavos(575)).unwrap(), "5.75");
        assert!(serde_json::from_str::<FareAmount>("-1.5").is_err());
    }
}
