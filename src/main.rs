use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use obra_dashboard::cli::{
    handle_budget_command, handle_dashboard_command, handle_movements_command,
    handle_rollup_command, BudgetArgs, CliContext, DashboardArgs, MovementsArgs, RollupArgs,
};
use obra_dashboard::config::{ObraPaths, Settings};

#[derive(Parser)]
#[command(
    name = "obra",
    version,
    about = "Financial dashboard for construction projects",
    long_about = "Reads snapshots of the project finance API and shows fleet totals, \
                  per-project balances, budget status and raw movements."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show fleet totals and per-project balances
    Dashboard(DashboardArgs),

    /// Build the dashboard from raw movements
    Rollup(RollupArgs),

    /// Show planned vs. realized cost and budget status
    #[command(alias = "orcamento")]
    Budget(BudgetArgs),

    /// List financial movements
    #[command(alias = "movimentos")]
    Movements(MovementsArgs),

    /// Write default settings and create the snapshot directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "obra_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = ObraPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = CliContext::new(paths, settings);

    match cli.command {
        Some(Commands::Dashboard(args)) => handle_dashboard_command(&ctx, args)?,
        Some(Commands::Rollup(args)) => handle_rollup_command(&ctx, args)?,
        Some(Commands::Budget(args)) => handle_budget_command(&ctx, args)?,
        Some(Commands::Movements(args)) => handle_movements_command(&ctx, args)?,
        Some(Commands::Init) => {
            ctx.settings.save(&ctx.paths)?;
            println!("Initialized at: {}", ctx.paths.base_dir().display());
            println!("Save API snapshots in: {}", ctx.paths.snapshot_dir().display());
        }
        Some(Commands::Config) => {
            let settings = &ctx.settings;
            println!("Obra Dashboard Configuration");
            println!("============================");
            println!("Config directory:   {}", ctx.paths.base_dir().display());
            println!("Snapshot directory: {}", ctx.paths.snapshot_dir().display());
            println!("Initialized:        {}", ctx.paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Refresh interval: {}s", settings.refresh_interval_secs);
            println!("  Color output:     {}", settings.color_output);
        }
        None => {
            println!("Obra Dashboard - project finances from the command line");
            println!();
            println!("Run 'obra --help' for usage information.");
        }
    }

    Ok(())
}
