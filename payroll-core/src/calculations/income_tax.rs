//! Income-tax withholding via single-bracket lookup.
//!
//! Published tax schedules fold the cumulative effect of the lower tiers
//! into a per-tier subtraction constant, so the whole adjusted base is
//! taxed at one tier's rate minus that tier's constant. Re-running these
//! tables through the marginal accumulator in
//! [`crate::calculations::contribution`] would double-count the lower
//! tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{floor_at_zero, percent_of, round_half_up};
use crate::models::{BracketTable, BracketTier};

/// Outcome of a tax lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// Base after the dependent and other deductions, clamped at zero.
    pub adjusted_base: Decimal,
    /// Total deducted for dependents before the lookup.
    pub dependent_deduction: Decimal,
    /// The matched tier, or `None` when the table did not cover the base.
    pub applied_tier: Option<BracketTier>,
    /// Withheld amount, never negative.
    pub amount: Decimal,
}

/// Assesses tax on `base` against a lookup-mode schedule.
///
/// The adjusted base is `base - dependents x per_dependent - other_deduction`,
/// clamped at zero. The first tier (ascending order) whose bounds contain
/// the adjusted base supplies the rate and subtraction constant; with a
/// contiguous, non-overlapping table the first match is the only match.
///
/// A base no tier covers is an anomaly of the supplied table, not of the
/// input: it is logged and reported as zero tax with no applied tier.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::withhold_income_tax;
/// use payroll_core::models::{BracketTable, BracketTier};
///
/// let table = BracketTable::new(vec![
///     BracketTier { lower: dec!(0), upper: Some(dec!(1903.98)), rate: dec!(0), deduction: dec!(0) },
///     BracketTier { lower: dec!(1903.99), upper: Some(dec!(2826.65)), rate: dec!(7.5), deduction: dec!(142.80) },
/// ]);
///
/// let assessment = withhold_income_tax(dec!(2000.00), &table, dec!(189.59), 0, dec!(0));
///
/// assert_eq!(assessment.amount, dec!(7.20));
/// ```
pub fn withhold_income_tax(
    base: Decimal,
    table: &BracketTable,
    per_dependent: Decimal,
    dependents: u32,
    other_deduction: Decimal,
) -> TaxAssessment {
    let dependent_deduction = round_half_up(Decimal::from(dependents) * per_dependent);
    let adjusted_base = floor_at_zero(base - dependent_deduction - other_deduction);

    let applied_tier = table
        .tiers()
        .iter()
        .find(|tier| tier.contains(adjusted_base))
        .cloned();

    let amount = match &applied_tier {
        Some(tier) => floor_at_zero(round_half_up(
            percent_of(adjusted_base, tier.rate) - tier.deduction,
        )),
        None => {
            warn!(%adjusted_base, "no tax tier covers the adjusted base, withholding zero");
            Decimal::ZERO
        }
    };

    TaxAssessment {
        adjusted_base,
        dependent_deduction,
        applied_tier,
        amount,
    }
}
