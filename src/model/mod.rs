pub mod corner;
pub mod figures;
pub mod percentage;

pub use self::corner::{Corner, CornerWeights};
pub use self::figures::{Figure, WeightDistribution, WeightFigure};
pub use self::percentage::{Percentage, Rounding};

use crate::error::DcResult;

/// Derives axle, side and cross figures from one set of corner readings.
#[derive(Debug, Clone)]
pub struct WeightModel {
    weights: CornerWeights,
    total: u64,
    rounding: Rounding,
}

impl WeightModel {
    pub fn new(weights: CornerWeights, rounding: Rounding) -> Self {
        Self {
            total: weights.total(),
            weights,
            rounding,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Raw weight at a point. Defined even when every corner reads zero.
    pub fn weight(&self, figure: Figure) -> u64 {
        let w = |c: Corner| u64::from(self.weights.get(c));
        match figure {
            Figure::FrontLeft => w(Corner::FrontLeft),
            Figure::FrontRight => w(Corner::FrontRight),
            Figure::FrontTotal => w(Corner::FrontLeft) + w(Corner::FrontRight),
            Figure::RearLeft => w(Corner::RearLeft),
            Figure::RearRight => w(Corner::RearRight),
            Figure::RearTotal => w(Corner::RearLeft) + w(Corner::RearRight),
            Figure::LeftSide => w(Corner::FrontLeft) + w(Corner::RearLeft),
            Figure::RightSide => w(Corner::FrontRight) + w(Corner::RearRight),
            Figure::Cross => w(Corner::RearLeft) + w(Corner::FrontRight),
        }
    }

    pub fn percentage(&self, figure: Figure) -> DcResult<Percentage> {
        Percentage::of(self.weight(figure), self.total, self.rounding)
    }

    pub fn figure(&self, figure: Figure) -> DcResult<WeightFigure> {
        Ok(WeightFigure {
            weight: self.weight(figure),
            percentage: self.percentage(figure)?,
        })
    }

    pub fn distribution(&self) -> DcResult<WeightDistribution> {
        Ok(WeightDistribution {
            front_left: self.figure(Figure::FrontLeft)?,
            front_right: self.figure(Figure::FrontRight)?,
            front_total: self.figure(Figure::FrontTotal)?,
            rear_left: self.figure(Figure::RearLeft)?,
            rear_right: self.figure(Figure::RearRight)?,
            rear_total: self.figure(Figure::RearTotal)?,
            left_side: self.figure(Figure::LeftSide)?,
            right_side: self.figure(Figure::RightSide)?,
            cross: self.figure(Figure::Cross)?,
        })
    }
}
