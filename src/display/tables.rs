//! Table rendering for projects, budget lines and movements

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::{format_date, format_money, format_optional_money, format_percentage, truncate, MoneyFormat};
use crate::models::{BudgetLine, BudgetStatus, Movement, ProjectRow};

const NAME_WIDTH: usize = 32;

#[derive(Tabled)]
struct ProjectTableRow {
    #[tabled(rename = "Código")]
    code: String,
    #[tabled(rename = "Obra")]
    name: String,
    #[tabled(rename = "Despesas")]
    expenses: String,
    #[tabled(rename = "Aportes rateados")]
    contributions: String,
    #[tabled(rename = "Rentabilidade")]
    returns: String,
    #[tabled(rename = "Saldo")]
    balance: String,
}

#[derive(Tabled)]
struct BudgetTableRow {
    #[tabled(rename = "Código")]
    code: String,
    #[tabled(rename = "Obra")]
    name: String,
    #[tabled(rename = "Previsto")]
    planned: String,
    #[tabled(rename = "Realizado")]
    realized: String,
    #[tabled(rename = "Desvio")]
    deviation: String,
    #[tabled(rename = "%")]
    ratio: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct MovementTableRow {
    #[tabled(rename = "Competência")]
    competencia: String,
    #[tabled(rename = "Código")]
    code: String,
    #[tabled(rename = "Obra")]
    name: String,
    #[tabled(rename = "Tipo")]
    kind: String,
    #[tabled(rename = "Valor")]
    amount: String,
    #[tabled(rename = "Inserido em")]
    inserted: String,
}

fn render<T: Tabled>(rows: Vec<T>, numeric: std::ops::Range<usize>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(numeric)).with(Alignment::right()))
        .to_string()
}

/// Project rows with their balances; a trailing `*` marks a deficit
pub fn format_project_table(rows: &[ProjectRow], money: &MoneyFormat) -> String {
    if rows.is_empty() {
        return "Nenhuma obra encontrada.".to_string();
    }

    let table_rows = rows
        .iter()
        .map(|row| {
            let balance = format_money(row.balance, money);
            ProjectTableRow {
                code: row.project.project_code.clone(),
                name: truncate(row.project.display_name(), NAME_WIDTH),
                expenses: format_money(row.project.total_expenses, money),
                contributions: format_money(row.project.apportioned_contributions, money),
                returns: format_money(row.project.investment_returns, money),
                balance: if row.balance < 0.0 {
                    format!("{} *", balance)
                } else {
                    balance
                },
            }
        })
        .collect();

    render(table_rows, 2..6)
}

/// Budget lines with deviation, completion ratio and status
pub fn format_budget_table(rows: &[(BudgetLine, BudgetStatus)], money: &MoneyFormat) -> String {
    if rows.is_empty() {
        return "Nenhum orçamento cadastrado.".to_string();
    }

    let table_rows = rows
        .iter()
        .map(|(line, status)| BudgetTableRow {
            code: line.project_code.clone(),
            name: truncate(line.display_name(), NAME_WIDTH),
            planned: format_optional_money(line.planned_cost, money),
            realized: format_optional_money(line.realized_cost, money),
            deviation: format_money(status.deviation, money),
            ratio: format_percentage(status.completion_ratio),
            status: status.label.label().to_string(),
        })
        .collect();

    render(table_rows, 2..6)
}

/// Movement listing
pub fn format_movement_table(movements: &[Movement], money: &MoneyFormat, date_format: &str) -> String {
    if movements.is_empty() {
        return "Nenhum movimento encontrado.".to_string();
    }

    let table_rows = movements
        .iter()
        .map(|m| MovementTableRow {
            competencia: m.competencia.clone(),
            code: m.project_code.clone(),
            name: truncate(m.display_name(), NAME_WIDTH),
            kind: m.kind.to_string(),
            amount: format_money(m.amount, money),
            inserted: m
                .inserted_at
                .as_ref()
                .map(|ts| format_date(ts, date_format))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    render(table_rows, 4..5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MovementKind, ProjectFinancials};
    use crate::services::{classify_line, project_rows};

    #[test]
    fn test_project_table_contents() {
        let projects = vec![
            ProjectFinancials::with_totals("A", 1000.0, 1200.0, 50.0).named("Alpha"),
            ProjectFinancials::with_totals("B", 500.0, 400.0, 0.0),
        ];
        let table = format_project_table(&project_rows(&projects), &MoneyFormat::default());

        assert!(table.contains("Código"));
        assert!(table.contains("Alpha"));
        assert!(table.contains("R$ 250,00"));
        assert!(table.contains("-R$ 100,00 *"));
    }

    #[test]
    fn test_empty_tables() {
        let money = MoneyFormat::default();
        assert_eq!(format_project_table(&[], &money), "Nenhuma obra encontrada.");
        assert_eq!(format_budget_table(&[], &money), "Nenhum orçamento cadastrado.");
        assert_eq!(
            format_movement_table(&[], &money, "%d/%m/%Y"),
            "Nenhum movimento encontrado."
        );
    }

    #[test]
    fn test_budget_table_contents() {
        let line = BudgetLine::new("A", Some(1000.0), Some(1100.0));
        let status = classify_line(&line);
        let table = format_budget_table(&[(line, status)], &MoneyFormat::default());

        assert!(table.contains("110.0%"));
        assert!(table.contains("Acima do orçado"));
        assert!(table.contains("R$ 100,00"));
    }

    #[test]
    fn test_movement_table_contents() {
        let movement = Movement::new("2025-02", "A", MovementKind::Expense, 12.5);
        let table = format_movement_table(&[movement], &MoneyFormat::default(), "%d/%m/%Y");
        assert!(table.contains("Despesa"));
        assert!(table.contains("R$ 12,50"));
    }
}
