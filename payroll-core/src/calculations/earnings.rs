//! Earnings itemization: hourly rate, conditional premium lines, gross pay.
//!
//! Lines are appended in presentation order and only when their driving
//! quantity is nonzero (or, for the hazard/unhealthy premiums, when the
//! premium is enabled at all). Zero-valued drivers produce no line rather
//! than a zero line.

use rust_decimal::Decimal;

use crate::calculations::common::{percent_of, round_half_up};
use crate::models::{LineItem, PayrollInputs};

/// Overtime multiplier for the 50% band.
const OVERTIME_50_FACTOR: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
/// Overtime multiplier for the 100% band.
const OVERTIME_100_FACTOR: Decimal = Decimal::TWO;

/// Itemized earnings plus the derived figures the rest of the pipeline
/// needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsBreakdown {
    pub lines: Vec<LineItem>,
    pub gross_pay: Decimal,
    /// Kept at full precision; only line amounts are rounded.
    pub hourly_rate: Decimal,
}

/// Computes the earnings side of the pay statement.
///
/// The hourly rate is the explicit override when present and positive,
/// otherwise base salary divided by normal monthly hours (validated
/// positive upstream). Pure function of its inputs.
pub fn compute_earnings(inputs: &PayrollInputs) -> EarningsBreakdown {
    let hourly_rate = match inputs.hourly_rate_override {
        Some(rate) if rate > Decimal::ZERO => rate,
        _ => inputs.base_salary / inputs.normal_monthly_hours,
    };

    let mut lines = vec![LineItem::flat("Base salary", inputs.base_salary)];

    if inputs.overtime_hours_50 > Decimal::ZERO {
        lines.push(overtime_line(
            "Overtime 50%",
            hourly_rate,
            inputs.overtime_hours_50,
            OVERTIME_50_FACTOR,
            Decimal::from(50),
        ));
    }
    if inputs.overtime_hours_100 > Decimal::ZERO {
        lines.push(overtime_line(
            "Overtime 100%",
            hourly_rate,
            inputs.overtime_hours_100,
            OVERTIME_100_FACTOR,
            Decimal::ONE_HUNDRED,
        ));
    }
    if inputs.night_hours > Decimal::ZERO {
        let amount = round_half_up(percent_of(
            hourly_rate * inputs.night_hours,
            inputs.night_premium_percent,
        ));
        lines.push(LineItem::derived(
            "Night differential",
            format!("{:.2} x {}", hourly_rate, inputs.night_hours),
            Some(inputs.night_premium_percent),
            amount,
        ));
    }
    if let Some(rate) = inputs.hazard_premium_percent {
        let amount = round_half_up(percent_of(inputs.base_salary, rate));
        lines.push(LineItem::rated(
            "Hazard premium",
            inputs.base_salary,
            rate,
            amount,
        ));
    }
    if let Some(rate) = inputs.unhealthy_premium_percent {
        let amount = round_half_up(percent_of(inputs.base_salary, rate));
        lines.push(LineItem::rated(
            "Unhealthy-conditions premium",
            inputs.base_salary,
            rate,
            amount,
        ));
    }
    if inputs.meal_benefit > Decimal::ZERO {
        lines.push(LineItem::flat("Meal benefit", inputs.meal_benefit));
    }
    if inputs.other_earnings > Decimal::ZERO {
        lines.push(LineItem::flat("Other earnings", inputs.other_earnings));
    }

    let gross_pay = lines.iter().map(|line| line.amount).sum();

    EarningsBreakdown {
        lines,
        gross_pay,
        hourly_rate,
    }
}

fn overtime_line(
    description: &str,
    hourly_rate: Decimal,
    hours: Decimal,
    factor: Decimal,
    rate_percent: Decimal,
) -> LineItem {
    let amount = round_half_up(hourly_rate * hours * factor);
    LineItem::derived(
        description,
        format!("{hourly_rate:.2} x {hours}"),
        Some(rate_percent),
        amount,
    )
}
