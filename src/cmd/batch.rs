use crate::reports;
use clap::Args;
use distcalc::config::Config;
use distcalc::error::{DcResult, DistCalcError};
use distcalc::loader::{load_weighings, Rejected};
use distcalc::model::WeightModel;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV with a header row and `label,fl,fr,rl,rr` columns
    pub csv: PathBuf,
}

pub fn run(args: BatchArgs, config: &Config) -> DcResult<()> {
    let mut batch = load_weighings(&args.csv)?;
    let mut results = Vec::with_capacity(batch.weighings.len());

    for w in batch.weighings {
        match WeightModel::new(w.weights, config.calc.rounding).distribution() {
            Ok(dist) => results.push((w.label, dist)),
            Err(error @ DistCalcError::DivisionByZero) => batch.rejected.push(Rejected {
                line: w.line,
                label: w.label,
                error,
            }),
            Err(e) => return Err(e),
        }
    }

    for r in &batch.rejected {
        warn!("⚠️  Line {} ('{}'): {}", r.line, r.label, r.error);
    }

    reports::print_batch_report(&results);
    reports::print_rejected(&batch.rejected);
    Ok(())
}
