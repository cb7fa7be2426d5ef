use crate::diagram::spacing::SpacingPolicy;
use crate::diagram::template::{
    DYNAMIC_SPACE_PADDING, DYNAMIC_SPACE_PADDING_LIMIT, MAX_DIGIT_LENGTH, MAX_DIGIT_LENGTH_LIMIT,
};
use crate::error::{DcResult, DistCalcError};
use crate::model::Rounding;
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub render: RenderSettings,
    #[command(flatten)]
    pub calc: CalcSettings,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Digits a weight column is laid out for
    #[arg(long, default_value_t = MAX_DIGIT_LENGTH)]
    pub max_digit_length: usize,

    /// Spaces added by {vsd} on top of the allocation
    #[arg(long, default_value_t = DYNAMIC_SPACE_PADDING)]
    pub dynamic_space_padding: usize,

    #[arg(long, value_enum, default_value_t = SpacingPolicy::ScanOrder)]
    pub spacing: SpacingPolicy,
}

impl RenderSettings {
    pub fn validate(&self) -> DcResult<()> {
        if !(1..=MAX_DIGIT_LENGTH_LIMIT).contains(&self.max_digit_length) {
            return Err(DistCalcError::Config(format!(
                "max_digit_length must be between 1 and {}, got {}",
                MAX_DIGIT_LENGTH_LIMIT, self.max_digit_length
            )));
        }
        if self.dynamic_space_padding > DYNAMIC_SPACE_PADDING_LIMIT {
            return Err(DistCalcError::Config(format!(
                "dynamic_space_padding must be at most {}, got {}",
                DYNAMIC_SPACE_PADDING_LIMIT, self.dynamic_space_padding
            )));
        }
        Ok(())
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_digit_length: MAX_DIGIT_LENGTH,
            dynamic_space_padding: DYNAMIC_SPACE_PADDING,
            spacing: SpacingPolicy::ScanOrder,
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    #[arg(long, value_enum, default_value_t = Rounding::HalfAwayFromZero)]
    pub rounding: Rounding,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DcResult<Self> {
        let path = path.as_ref();
        debug!("Reading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DcResult<()> {
        self.render.validate()
    }

    /// Copies over only the values the user actually typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    debug!("CLI override: {}", stringify!($field));
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(render.max_digit_length);
        update_if_present!(render.dynamic_space_padding);
        update_if_present!(render.spacing);
        update_if_present!(calc.rounding);
    }
}
