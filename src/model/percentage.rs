use crate::error::{DcResult, DistCalcError};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Tie-breaking rule for the single fractional digit.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    #[default]
    HalfAwayFromZero,
    HalfEven,
}

/// A share of the total weight, held exactly in tenths of a percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage {
    tenths: u64,
}

impl Percentage {
    /// `part / whole * 100`, rounded to one decimal place.
    ///
    /// Works on the exact rational value, so the result never depends on how
    /// the quotient happens to be represented in binary floating point.
    pub fn of(part: u64, whole: u64, rounding: Rounding) -> DcResult<Self> {
        if whole == 0 {
            return Err(DistCalcError::DivisionByZero);
        }
        let num = u128::from(part) * 1000;
        let whole = u128::from(whole);
        let (q, r) = (num / whole, num % whole);

        let round_up = match rounding {
            Rounding::HalfAwayFromZero => 2 * r >= whole,
            Rounding::HalfEven => 2 * r > whole || (2 * r == whole && q % 2 == 1),
        };
        let tenths = if round_up { q + 1 } else { q };

        // part <= whole holds for every figure, but stay total for arbitrary callers
        let tenths = u64::try_from(tenths).unwrap_or(u64::MAX);
        Ok(Self { tenths })
    }

    pub fn from_tenths(tenths: u64) -> Self {
        Self { tenths }
    }

    pub fn tenths(self) -> u64 {
        self.tenths
    }

    pub fn as_f64(self) -> f64 {
        self.tenths as f64 / 10.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
