//! Deduction itemization: benefits charged back, absences, tardiness,
//! alimony, and the two withholding lines.
//!
//! Variable deductions appear only when their driving quantity is nonzero.
//! The contribution and tax lines are always appended last, zero or not,
//! so the statement accounts for every figure the withholding stages
//! produced. Net pay is gross minus the total and is reported as-is even
//! when negative.

use rust_decimal::Decimal;

use crate::calculations::common::{percent_of, round_half_up};
use crate::calculations::contribution::ContributionBreakdown;
use crate::calculations::income_tax::TaxAssessment;
use crate::models::{LineBasis, LineItem, PayrollInputs, TransportDeduction};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Itemized deductions plus their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionBreakdown {
    pub lines: Vec<LineItem>,
    pub total: Decimal,
}

/// Builds the deduction side of the pay statement.
///
/// The meal benefit is deliberately listed here as well as on the earnings
/// side: the two entries net to zero but both are kept so the statement
/// shows the benefit and its charge-back explicitly.
pub fn compute_deductions(
    inputs: &PayrollInputs,
    gross_pay: Decimal,
    hourly_rate: Decimal,
    contribution: &ContributionBreakdown,
    tax: &TaxAssessment,
) -> DeductionBreakdown {
    let mut lines = Vec::new();

    match inputs.transport {
        Some(TransportDeduction::Percent(rate)) => {
            let amount = round_half_up(percent_of(inputs.base_salary, rate));
            lines.push(LineItem::rated(
                "Transport (percent of salary)",
                inputs.base_salary,
                rate,
                amount,
            ));
        }
        Some(TransportDeduction::Fixed(amount)) => {
            lines.push(LineItem::flat("Transport (fixed)", amount));
        }
        None => {}
    }

    if inputs.meal_benefit > Decimal::ZERO {
        lines.push(LineItem::flat("Meal benefit", inputs.meal_benefit));
    }

    if inputs.absence_days > 0 {
        let daily_rate = inputs.base_salary / Decimal::from(inputs.working_days_in_month);
        let amount = round_half_up(daily_rate * Decimal::from(inputs.absence_days));
        lines.push(LineItem::derived(
            "Absences",
            format!(
                "{:.2} / {} x {}",
                inputs.base_salary, inputs.working_days_in_month, inputs.absence_days
            ),
            None,
            amount,
        ));
    }

    if inputs.tardiness_minutes > 0 {
        let hours = Decimal::from(inputs.tardiness_minutes) / MINUTES_PER_HOUR;
        let amount = round_half_up(hours * hourly_rate);
        lines.push(LineItem::derived(
            "Tardiness",
            format!("{:.2}h x {:.2}", hours, hourly_rate),
            None,
            amount,
        ));
    }

    if inputs.alimony > Decimal::ZERO {
        lines.push(LineItem::flat("Alimony", inputs.alimony));
    }

    // Withholding lines close the itemization regardless of magnitude.
    lines.push(LineItem {
        description: "Social contribution".to_string(),
        basis: LineBasis::Amount(gross_pay),
        rate: None,
        amount: contribution.total,
    });
    lines.push(LineItem {
        description: "Income tax".to_string(),
        basis: LineBasis::Amount(tax.adjusted_base),
        rate: tax.applied_tier.as_ref().map(|tier| tier.rate),
        amount: tax.amount,
    });

    let total = lines.iter().map(|line| line.amount).sum();

    DeductionBreakdown { lines, total }
}
