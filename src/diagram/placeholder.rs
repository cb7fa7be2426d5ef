use crate::error::{DcResult, DistCalcError};
use crate::model::Figure;
use strum_macros::{Display, EnumIter, EnumString};

/// Single-letter names the diagram uses for the nine figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PlaceholderKey {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

impl PlaceholderKey {
    pub fn figure(self) -> Figure {
        match self {
            Self::A => Figure::RearLeft,
            Self::B => Figure::FrontLeft,
            Self::C => Figure::LeftSide,
            Self::D => Figure::RearTotal,
            Self::E => Figure::Cross,
            Self::F => Figure::FrontTotal,
            Self::G => Figure::RightSide,
            Self::H => Figure::RearRight,
            Self::I => Figure::FrontRight,
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        letter.encode_utf8(&mut buf).parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{vsd}`: allocation plus the dynamic padding.
    DynamicSpace,
    /// `{vss}`: exactly the allocation.
    StaticSpace,
    /// `{<key><0|1>}`
    Value { key: PlaceholderKey, field: Field },
}

impl Placeholder {
    pub fn parse(body: &str) -> DcResult<Self> {
        match body {
            "vsd" => return Ok(Self::DynamicSpace),
            "vss" => return Ok(Self::StaticSpace),
            _ => {}
        }

        let unknown = || DistCalcError::UnknownPlaceholder {
            token: body.to_string(),
        };

        let mut chars = body.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(unknown());
        };

        let key = PlaceholderKey::from_letter(letter).ok_or_else(unknown)?;
        let field = match digit {
            '0' => Field::Weight,
            '1' => Field::Percentage,
            _ => return Err(unknown()),
        };
        Ok(Self::Value { key, field })
    }

    /// Weight placeholders are the only ones that move the space allocation.
    pub fn sets_allocation(&self) -> bool {
        matches!(
            self,
            Self::Value {
                field: Field::Weight,
                ..
            }
        )
    }
}
