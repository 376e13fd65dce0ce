//! Dashboard commands
//!
//! `obra dashboard` renders a summary snapshot; `obra rollup` builds the same
//! view from raw movements.

use std::path::Path;
use std::thread;
use std::time::Duration;

use clap::Args;
use tracing::{debug, error, info, warn};

use super::{print_json, CliContext};
use crate::error::DashboardResult;
use crate::ingest::{self, cross_check_totals, TOTALS_TOLERANCE};
use crate::reports::DashboardReport;
use crate::services::{final_balance_mismatches, rollup};

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Summary snapshot (`/resumo` response), path or name in the snapshot directory
    pub snapshot: String,

    /// Print structured JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Reload the snapshot on the configured refresh interval
    #[arg(short, long)]
    pub watch: bool,
}

#[derive(Args, Debug)]
pub struct RollupArgs {
    /// Movements snapshot (`/movimentos` response)
    pub snapshot: String,

    /// Print structured JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Build the dashboard for one summary snapshot
pub fn build_dashboard(path: &Path) -> DashboardResult<DashboardReport> {
    let snapshot = ingest::load_summary(path)?;
    let report = DashboardReport::build(&snapshot.projects);
    debug!(summary = %report.summary, "aggregated snapshot");

    let mismatches = snapshot
        .reported
        .map(|reported| cross_check_totals(&reported, &report.summary))
        .unwrap_or_default();

    Ok(report.with_mismatches(mismatches))
}

fn render(ctx: &CliContext, report: &DashboardReport, json: bool) -> DashboardResult<()> {
    if json {
        print_json(report)
    } else {
        println!("{}", report.format_terminal(&ctx.settings));
        Ok(())
    }
}

pub fn handle_dashboard_command(ctx: &CliContext, args: DashboardArgs) -> DashboardResult<()> {
    let path = ctx.paths.resolve_snapshot(&args.snapshot);

    if !args.watch {
        let report = build_dashboard(&path)?;
        return render(ctx, &report, args.json);
    }

    let interval = Duration::from_secs(ctx.settings.refresh_interval_secs);
    info!(path = %path.display(), every_secs = interval.as_secs(), "watching snapshot");

    loop {
        // Each cycle starts from the file alone; nothing carries over.
        match build_dashboard(&path) {
            Ok(report) => {
                if !args.json {
                    print!("\x1b[2J\x1b[H");
                }
                render(ctx, &report, args.json)?;
            }
            Err(e) => error!(error = %e, "failed to refresh dashboard"),
        }
        thread::sleep(interval);
    }
}

pub fn handle_rollup_command(ctx: &CliContext, args: RollupArgs) -> DashboardResult<()> {
    let path = ctx.paths.resolve_snapshot(&args.snapshot);
    let movements = ingest::load_movements(&path)?;
    let projects = rollup(&movements);
    info!(projects = projects.len(), "rolled up movements");

    // Saldo_Final rows are informational; the computed balance wins.
    for mismatch in final_balance_mismatches(&movements, &projects, TOTALS_TOLERANCE) {
        warn!(
            project = %mismatch.project_code,
            reported = mismatch.reported,
            computed = mismatch.computed,
            "reported final balance differs from computed balance"
        );
    }

    render(ctx, &DashboardReport::build(&projects), args.json)
}
