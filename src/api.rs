use crate::config::Config;
use crate::diagram::render_diagram;
use crate::error::DcResult;
use crate::model::{CornerWeights, WeightDistribution, WeightModel};
use serde::Serialize;

/// Everything produced for one set of scale readings.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub weights: CornerWeights,
    pub total: u64,
    pub distribution: WeightDistribution,
    pub diagram: String,
}

/// Service: validated readings in, figures and rendered diagram out.
pub fn calculate(weights: CornerWeights, config: &Config) -> DcResult<Calculation> {
    let model = WeightModel::new(weights, config.calc.rounding);
    let distribution = model.distribution()?;
    let diagram = render_diagram(&distribution, &config.render)?;

    Ok(Calculation {
        weights,
        total: model.total(),
        distribution,
        diagram,
    })
}

/// Service: same as [`calculate`], starting from raw text fields (FL, FR, RL, RR).
pub fn calculate_from_text(raw: [&str; 4], config: &Config) -> DcResult<Calculation> {
    calculate(CornerWeights::parse(raw)?, config)
}
