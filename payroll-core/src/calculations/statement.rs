//! Simplified income statement (DRE) derived from the employer cost.
//!
//! Purely additive: revenue minus personnel cost and other expenses. Each
//! row carries a formula annotation so the rendered statement shows how
//! the figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One statement row with its display formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    pub account: String,
    pub amount: Decimal,
    pub formula: String,
}

/// The five-row simplified statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub rows: Vec<StatementRow>,
    pub total_expenses: Decimal,
    pub operating_result: Decimal,
}

/// Folds the employer cost and the optional revenue/other-expense inputs
/// into the statement.
pub fn compose_statement(
    personnel_cost: Decimal,
    revenue: Decimal,
    other_expenses: Decimal,
) -> IncomeStatement {
    let total_expenses = personnel_cost + other_expenses;
    let operating_result = revenue - total_expenses;

    let rows = vec![
        StatementRow {
            account: "Operating revenue".to_string(),
            amount: revenue,
            formula: format!("= {revenue:.2}"),
        },
        StatementRow {
            account: "Personnel expenses (employer cost)".to_string(),
            amount: personnel_cost,
            formula: format!("= employer cost = {personnel_cost:.2}"),
        },
        StatementRow {
            account: "Other expenses".to_string(),
            amount: other_expenses,
            formula: format!("= {other_expenses:.2}"),
        },
        StatementRow {
            account: "Total expenses".to_string(),
            amount: total_expenses,
            formula: format!("= {personnel_cost:.2} + {other_expenses:.2} = {total_expenses:.2}"),
        },
        StatementRow {
            account: "Operating result".to_string(),
            amount: operating_result,
            formula: format!("= {revenue:.2} - {total_expenses:.2} = {operating_result:.2}"),
        },
    ];

    IncomeStatement {
        rows,
        total_expenses,
        operating_result,
    }
}
