//! Budget status command

use clap::Args;
use tracing::info;

use super::{print_json, CliContext};
use crate::error::DashboardResult;
use crate::ingest;
use crate::models::BudgetLine;
use crate::reports::BudgetStatusReport;
use crate::services::reconcile;

#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Budget snapshot (`/orcamento` response)
    pub snapshot: String,

    /// Summary snapshot used to fill in realized costs
    #[arg(short, long)]
    pub resumo: Option<String>,

    /// Print structured JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Load budget lines, joined with project expenses when a summary is given
pub fn load_lines(ctx: &CliContext, args: &BudgetArgs) -> DashboardResult<Vec<BudgetLine>> {
    let lines = ingest::load_budget(ctx.paths.resolve_snapshot(&args.snapshot))?;

    match &args.resumo {
        Some(resumo) => {
            let snapshot = ingest::load_summary(ctx.paths.resolve_snapshot(resumo))?;
            let reconciled = reconcile(&lines, &snapshot.projects);
            info!(lines = reconciled.len(), "reconciled budget with project expenses");
            Ok(reconciled)
        }
        None => Ok(lines),
    }
}

pub fn handle_budget_command(ctx: &CliContext, args: BudgetArgs) -> DashboardResult<()> {
    let lines = load_lines(ctx, &args)?;
    let report = BudgetStatusReport::build(&lines);

    if args.json {
        print_json(&report)
    } else {
        println!("{}", report.format_terminal(&ctx.settings));
        Ok(())
    }
}
