use super::Readings;
use crate::reports;
use clap::Args;
use distcalc::api;
use distcalc::config::Config;
use distcalc::error::DcResult;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub readings: Readings,

    /// Print the full calculation as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ReportArgs, config: &Config) -> DcResult<()> {
    let calc = api::calculate_from_text(args.readings.as_fields(), config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&calc)?);
    } else {
        reports::print_figure_table(&calc);
    }
    Ok(())
}
