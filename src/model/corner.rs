use crate::error::{DcResult, DistCalcError, InputIssue};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[strum(serialize = "fl", to_string = "front-left")]
    FrontLeft,
    #[strum(serialize = "fr", to_string = "front-right")]
    FrontRight,
    #[strum(serialize = "rl", to_string = "rear-left")]
    RearLeft,
    #[strum(serialize = "rr", to_string = "rear-right")]
    RearRight,
}

/// The four scale readings, in input order FL, FR, RL, RR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerWeights {
    pub front_left: u32,
    pub front_right: u32,
    pub rear_left: u32,
    pub rear_right: u32,
}

impl CornerWeights {
    pub const ORDER: [Corner; 4] = [
        Corner::FrontLeft,
        Corner::FrontRight,
        Corner::RearLeft,
        Corner::RearRight,
    ];

    pub fn new(front_left: u32, front_right: u32, rear_left: u32, rear_right: u32) -> Self {
        Self {
            front_left,
            front_right,
            rear_left,
            rear_right,
        }
    }

    /// Parses raw text fields in FL, FR, RL, RR order.
    ///
    /// The first field that fails is reported; fields are not partially accepted.
    pub fn parse(raw: [&str; 4]) -> DcResult<Self> {
        let mut parsed = [0u32; 4];
        for (slot, (corner, text)) in parsed.iter_mut().zip(Self::ORDER.iter().zip(raw)) {
            *slot = parse_corner(*corner, text)?;
        }
        let [fl, fr, rl, rr] = parsed;
        Ok(Self::new(fl, fr, rl, rr))
    }

    pub fn get(&self, corner: Corner) -> u32 {
        match corner {
            Corner::FrontLeft => self.front_left,
            Corner::FrontRight => self.front_right,
            Corner::RearLeft => self.rear_left,
            Corner::RearRight => self.rear_right,
        }
    }

    pub fn total(&self) -> u64 {
        Self::ORDER.iter().map(|&c| u64::from(self.get(c))).sum()
    }
}

fn parse_corner(corner: Corner, text: &str) -> DcResult<u32> {
    let invalid = |reason| DistCalcError::InvalidInput { corner, reason };

    let value: i64 = text.trim().parse().map_err(|e: std::num::ParseIntError| {
        invalid(match e.kind() {
            IntErrorKind::Empty => InputIssue::Missing,
            IntErrorKind::PosOverflow => InputIssue::OutOfRange,
            IntErrorKind::NegOverflow => InputIssue::Negative,
            _ => InputIssue::NotNumeric,
        })
    })?;

    if value < 0 {
        return Err(invalid(InputIssue::Negative));
    }
    u32::try_from(value).map_err(|_| invalid(InputIssue::OutOfRange))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_of(raw: [&str; 4]) -> (Corner, InputIssue) {
        match CornerWeights::parse(raw) {
            Err(DistCalcError::InvalidInput { corner, reason }) => (corner, reason),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn parses_trimmed_integers() {
        let w = CornerWeights::parse([" 612", "587 ", "498", "455"]).unwrap();
        assert_eq!(w, CornerWeights::new(612, 587, 498, 455));
        assert_eq!(w.total(), 2152);
    }

    #[test]
    fn reports_the_offending_corner() {
        assert_eq!(
            issue_of(["1", "", "1", "1"]),
            (Corner::FrontRight, InputIssue::Missing)
        );
        assert_eq!(
            issue_of(["1", "1", "12.5", "1"]),
            (Corner::RearLeft, InputIssue::NotNumeric)
        );
        assert_eq!(
            issue_of(["1", "1", "1", "-3"]),
            (Corner::RearRight, InputIssue::Negative)
        );
        assert_eq!(
            issue_of(["99999999999", "1", "1", "1"]),
            (Corner::FrontLeft, InputIssue::OutOfRange)
        );
    }

    #[test]
    fn corner_names_parse_both_ways() {
        assert_eq!("FL".parse::<Corner>().unwrap(), Corner::FrontLeft);
        assert_eq!("rear-right".parse::<Corner>().unwrap(), Corner::RearRight);
        assert_eq!(Corner::FrontRight.to_string(), "front-right");
    }

    #[test]
    fn total_does_not_overflow() {
        let w = CornerWeights::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(w.total(), 4 * u64::from(u32::MAX));
    }
}
