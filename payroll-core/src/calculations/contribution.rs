//! Contribution withholding over a true marginal schedule.
//!
//! Each tier taxes only the slice of the amount that falls inside its own
//! bounds, so the total is continuous as the amount crosses tier
//! boundaries. This is deliberately a different algorithm from the
//! income-tax lookup in [`crate::calculations::income_tax`]: published
//! contribution schedules are marginal, published tax schedules fold the
//! lower tiers into a per-tier subtraction constant.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{floor_at_zero, percent_of, round_half_up};
use crate::models::BracketTable;

/// One tier's share of the contribution. Every tier of the table is
/// reported, zero or not, so the breakdown is a complete audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierContribution {
    pub tier_label: String,
    /// The slice of the amount that fell inside this tier.
    pub taxed_base: Decimal,
    /// Tier rate as a percentage.
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Full per-tier breakdown plus the summed withholding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBreakdown {
    pub tiers: Vec<TierContribution>,
    pub total: Decimal,
}

/// Evaluates the marginal schedule against `amount`.
///
/// For each tier in ascending order the taxed slice is
/// `min(amount, upper) - lower`, clamped at zero; open-ended tiers take
/// everything above their lower bound. Tier amounts are rounded to cents
/// individually and summed.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::withhold_contribution;
/// use payroll_core::models::{BracketTable, BracketTier};
///
/// let table = BracketTable::new(vec![
///     BracketTier { lower: dec!(0), upper: Some(dec!(1212.00)), rate: dec!(7.5), deduction: dec!(0) },
///     BracketTier { lower: dec!(1212.01), upper: Some(dec!(2427.35)), rate: dec!(9), deduction: dec!(0) },
///     BracketTier { lower: dec!(2427.36), upper: Some(dec!(3641.03)), rate: dec!(12), deduction: dec!(0) },
///     BracketTier { lower: dec!(3641.04), upper: Some(dec!(7087.22)), rate: dec!(14), deduction: dec!(0) },
/// ]);
///
/// let breakdown = withhold_contribution(dec!(3500.00), &table);
///
/// assert_eq!(breakdown.total, dec!(329.00));
/// assert_eq!(breakdown.tiers[3].amount, dec!(0.00));
/// ```
pub fn withhold_contribution(
    amount: Decimal,
    table: &BracketTable,
) -> ContributionBreakdown {
    let mut tiers = Vec::with_capacity(table.tiers().len());
    let mut total = Decimal::ZERO;

    for tier in table.tiers() {
        let taxed_base = if amount <= tier.lower {
            Decimal::ZERO
        } else {
            match tier.upper {
                Some(upper) => floor_at_zero(amount.min(upper) - tier.lower),
                None => amount - tier.lower,
            }
        };
        let withheld = round_half_up(percent_of(taxed_base, tier.rate));

        tiers.push(TierContribution {
            tier_label: tier.label(),
            taxed_base,
            rate: tier.rate,
            amount: withheld,
        });
        total += withheld;
    }

    ContributionBreakdown { tiers, total }
}
