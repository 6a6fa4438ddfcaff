use crate::demo::{run_catalog, run_demo, run_evaluate, CatalogArgs, DemoArgs, EvaluateArgs};
use clap::{Parser, Subcommand};
use site_scout::config::AppConfig;
use site_scout::error::AppError;
use site_scout::evaluation::MetricCatalog;
use site_scout::telemetry;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Site Scout",
    about = "Rate candidate vending-machine sites and turn the ratings into a placement recommendation",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the catalog metrics that apply to a site type
    Catalog(CatalogArgs),
    /// Evaluate one site from a ratings sheet and optional financial projections
    Evaluate(EvaluateArgs),
    /// Walk through a sample office and school evaluation (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(MetricCatalog::standard()?);
    info!(
        ?config.environment,
        combination = %config.scoring.combination,
        minimum_rated = config.scoring.minimum_rated,
        "site scout ready"
    );

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Catalog(args) => run_catalog(args, &catalog),
        Command::Evaluate(args) => run_evaluate(args, catalog, config.scoring),
        Command::Demo(args) => run_demo(args, catalog, config.scoring),
    }
}
