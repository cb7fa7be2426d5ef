use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use distcalc::config::Config;
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info, Level};

mod cmd;
mod reports;

/// Rally car corner-weight distribution calculator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with render and calculation settings
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw the ASCII weight diagram
    Diagram(cmd::diagram::DiagramArgs),
    /// Tabulate the nine weight figures
    Report(cmd::report::ReportArgs),
    /// Compare several weighings from a CSV file
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Settings flags live on the subcommand, so their value sources do too.
    let cli_config = match &cli.command {
        Commands::Diagram(args) => &args.config,
        Commands::Report(args) => &args.config,
        Commands::Batch(args) => &args.config,
    };
    let config = resolve_config(cli.config.as_ref(), cli_config, &matches);
    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }
    debug!("Effective settings: {:?}", config);

    let result = match cli.command {
        Commands::Diagram(args) => cmd::diagram::run(args, &config),
        Commands::Report(args) => cmd::report::run(args, &config),
        Commands::Batch(args) => cmd::batch::run(args, &config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn resolve_config(
    path: Option<&PathBuf>,
    cli_config: &Config,
    matches: &clap::ArgMatches,
) -> Config {
    let Some(path) = path else {
        return cli_config.clone();
    };

    info!("⚖️  Loading settings from: {}", path.display());
    let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
        error!("❌ Failed to load settings '{}': {}", path.display(), e);
        process::exit(1);
    });

    if let Some((_, sub_matches)) = matches.subcommand() {
        config.merge_from_cli(cli_config, sub_matches);
    }
    config
}
