//! Employer-side charges and monthly accrual provisions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{percent_of, round_half_up};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const VACATION_BONUS_DIVISOR: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// What one month of employment costs the employer beyond the pay
/// statement itself: fund deposit, employer contribution, and the accrued
/// slices of the yearly obligations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCost {
    /// Severance-fund deposit on gross pay.
    pub fund_amount: Decimal,
    /// Employer-side social contribution on gross pay.
    pub employer_contribution: Decimal,
    /// One month's accrual of the 13th-month salary.
    pub accrual_13th: Decimal,
    /// One month's accrual of paid vacation.
    pub accrual_vacation: Decimal,
    /// One third of the vacation accrual (the constitutional bonus).
    pub accrual_vacation_bonus: Decimal,
    /// Gross pay plus everything above.
    pub total: Decimal,
}

/// Computes employer charges for one month.
///
/// Charges apply to gross pay; the 13th-month and vacation accruals are a
/// twelfth of the base salary each, and the vacation bonus is a third of
/// the vacation accrual.
pub fn compute_employer_cost(
    base_salary: Decimal,
    gross_pay: Decimal,
    fund_rate_percent: Decimal,
    employer_contribution_rate_percent: Decimal,
) -> EmployerCost {
    let fund_amount = round_half_up(percent_of(gross_pay, fund_rate_percent));
    let employer_contribution =
        round_half_up(percent_of(gross_pay, employer_contribution_rate_percent));
    let accrual_13th = round_half_up(base_salary / MONTHS_PER_YEAR);
    let accrual_vacation = round_half_up(base_salary / MONTHS_PER_YEAR);
    let accrual_vacation_bonus = round_half_up(accrual_vacation / VACATION_BONUS_DIVISOR);

    let total = gross_pay
        + employer_contribution
        + fund_amount
        + accrual_13th
        + accrual_vacation
        + accrual_vacation_bonus;

    EmployerCost {
        fund_amount,
        employer_contribution,
        accrual_13th,
        accrual_vacation,
        accrual_vacation_bonus,
        total,
    }
}
