//! Movements listing command

use clap::Args;
use tracing::debug;

use super::{print_json, CliContext};
use crate::display::format_movement_table;
use crate::error::DashboardResult;
use crate::ingest;
use crate::services::{competencias, filter_movements, MovementFilter};

#[derive(Args, Debug)]
pub struct MovementsArgs {
    /// Movements snapshot (`/movimentos` response)
    pub snapshot: String,

    /// Only show this reporting period
    #[arg(short, long)]
    pub competencia: Option<String>,

    /// Only show this project code
    #[arg(short, long = "obra")]
    pub obra: Option<String>,

    /// List the reporting periods present instead of movements
    #[arg(long)]
    pub periods: bool,

    /// Print structured JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

pub fn handle_movements_command(ctx: &CliContext, args: MovementsArgs) -> DashboardResult<()> {
    let movements = ingest::load_movements(ctx.paths.resolve_snapshot(&args.snapshot))?;

    if args.periods {
        let periods = competencias(&movements);
        if args.json {
            return print_json(&periods);
        }
        for period in periods {
            println!("{}", period);
        }
        return Ok(());
    }

    let filter = MovementFilter::new(args.competencia, args.obra);
    let selected = filter_movements(&movements, &filter);
    debug!(
        filtered = !filter.is_empty(),
        total = movements.len(),
        selected = selected.len(),
        "selected movements"
    );

    if args.json {
        print_json(&selected)
    } else {
        println!(
            "{}",
            format_movement_table(
                &selected,
                &ctx.settings.money_format(),
                &ctx.settings.date_format
            )
        );
        println!("{} movimento(s)", selected.len());
        Ok(())
    }
}
