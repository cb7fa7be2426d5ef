use super::Readings;
use clap::Args;
use distcalc::api;
use distcalc::config::Config;
use distcalc::error::DcResult;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct DiagramArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub readings: Readings,
}

pub fn run(args: DiagramArgs, config: &Config) -> DcResult<()> {
    let calc = api::calculate_from_text(args.readings.as_fields(), config)?;
    debug!(
        "Rendered diagram for total {} with {} spacing",
        calc.total, config.render.spacing
    );
    println!("{}", calc.diagram);
    Ok(())
}
