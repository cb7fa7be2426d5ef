use super::percentage::Percentage;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The nine named points reported for a weighing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Figure {
    FrontLeft,
    FrontRight,
    FrontTotal,
    RearLeft,
    RearRight,
    RearTotal,
    LeftSide,
    RightSide,
    Cross,
}

impl Figure {
    pub fn label(self) -> &'static str {
        match self {
            Self::FrontLeft => "Front Left",
            Self::FrontRight => "Front Right",
            Self::FrontTotal => "Front",
            Self::RearLeft => "Rear Left",
            Self::RearRight => "Rear Right",
            Self::RearTotal => "Rear",
            Self::LeftSide => "Left Side",
            Self::RightSide => "Right Side",
            Self::Cross => "Cross (RL+FR)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightFigure {
    pub weight: u64,
    pub percentage: Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightDistribution {
    pub front_left: WeightFigure,
    pub front_right: WeightFigure,
    pub front_total: WeightFigure,
    pub rear_left: WeightFigure,
    pub rear_right: WeightFigure,
    pub rear_total: WeightFigure,
    pub left_side: WeightFigure,
    pub right_side: WeightFigure,
    pub cross: WeightFigure,
}

impl WeightDistribution {
    pub fn get(&self, figure: Figure) -> &WeightFigure {
        match figure {
            Figure::FrontLeft => &self.front_left,
            Figure::FrontRight => &self.front_right,
            Figure::FrontTotal => &self.front_total,
            Figure::RearLeft => &self.rear_left,
            Figure::RearRight => &self.rear_right,
            Figure::RearTotal => &self.rear_total,
            Figure::LeftSide => &self.left_side,
            Figure::RightSide => &self.right_side,
            Figure::Cross => &self.cross,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Figure, &WeightFigure)> + '_ {
        Figure::iter().map(move |f| (f, self.get(f)))
    }
}
