//! Progressive bracket tables shared by the contribution and income-tax
//! withholding schedules.
//!
//! A table is an ordered list of tiers. Tier bounds are inclusive on both
//! ends; the last tier may be open-ended (`upper: None`). Contribution
//! tables leave `deduction` at zero; income-tax tables carry the published
//! fixed subtraction constant per tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors detected by [`BracketTable::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    /// The table contains no tiers at all.
    #[error("bracket table is empty")]
    Empty,

    /// A tier's lower bound is below zero.
    #[error("tier {index} has a negative lower bound ({lower})")]
    NegativeLowerBound { index: usize, lower: Decimal },

    /// Tier bounds overlap or do not increase from one tier to the next.
    #[error("tier {index} bounds are not monotonically increasing")]
    NonMonotonicBounds { index: usize },

    /// An open-ended tier appears before the last position.
    #[error("open-ended tier {index} must be the last tier")]
    OpenEndedNotLast { index: usize },

    /// A tier's rate is below zero.
    #[error("tier {index} has a negative rate ({rate})")]
    NegativeRate { index: usize, rate: Decimal },

    /// A tier's fixed deduction is below zero.
    #[error("tier {index} has a negative fixed deduction ({deduction})")]
    NegativeDeduction { index: usize, deduction: Decimal },
}

/// One row of a progressive withholding schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTier {
    /// Inclusive lower bound of the tier.
    pub lower: Decimal,

    /// Inclusive upper bound, or `None` for the open-ended top tier.
    pub upper: Option<Decimal>,

    /// Rate as a percentage (7.5 means 7.5%), matching the user-visible
    /// table format.
    pub rate: Decimal,

    /// Fixed subtraction constant for lookup-mode schedules. Zero for
    /// marginal-mode schedules.
    #[serde(default)]
    pub deduction: Decimal,
}

impl BracketTier {
    /// Whether `amount` falls inside this tier's bounds.
    pub fn contains(
        &self,
        amount: Decimal,
    ) -> bool {
        amount >= self.lower && self.upper.is_none_or(|upper| amount <= upper)
    }

    /// Human-readable range, e.g. `"1212.01 - 2427.35"` or `"4664.69 - ∞"`.
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{:.2} - {:.2}", self.lower, upper),
            None => format!("{:.2} - ∞", self.lower),
        }
    }
}

/// An ordered progressive schedule, treated as immutable configuration for
/// the duration of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTable {
    tiers: Vec<BracketTier>,
}

impl BracketTable {
    pub fn new(tiers: Vec<BracketTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[BracketTier] {
        &self.tiers
    }

    /// Checks the table invariants: non-empty, non-negative bounds, rates
    /// and deductions, strictly increasing bounds, and at most one
    /// open-ended tier in the last position.
    ///
    /// Callers at the configuration boundary are expected to substitute a
    /// known-good default table on failure rather than abort.
    ///
    /// # Errors
    ///
    /// Returns the first [`BracketTableError`] found, scanning tiers in
    /// ascending order.
    pub fn validate(&self) -> Result<(), BracketTableError> {
        if self.tiers.is_empty() {
            return Err(BracketTableError::Empty);
        }

        let mut previous_upper: Option<Decimal> = None;
        let last = self.tiers.len() - 1;

        for (index, tier) in self.tiers.iter().enumerate() {
            if tier.lower < Decimal::ZERO {
                return Err(BracketTableError::NegativeLowerBound {
                    index,
                    lower: tier.lower,
                });
            }
            if tier.rate < Decimal::ZERO {
                return Err(BracketTableError::NegativeRate {
                    index,
                    rate: tier.rate,
                });
            }
            if tier.deduction < Decimal::ZERO {
                return Err(BracketTableError::NegativeDeduction {
                    index,
                    deduction: tier.deduction,
                });
            }

            match tier.upper {
                Some(upper) if upper <= tier.lower => {
                    return Err(BracketTableError::NonMonotonicBounds { index });
                }
                None if index != last => {
                    return Err(BracketTableError::OpenEndedNotLast { index });
                }
                _ => {}
            }

            // Tiers must start above where the previous one ended.
            if let Some(prev) = previous_upper {
                if tier.lower <= prev {
                    return Err(BracketTableError::NonMonotonicBounds { index });
                }
            }
            previous_upper = tier.upper;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn tier(
        lower: Decimal,
        upper: Option<Decimal>,
        rate: Decimal,
    ) -> BracketTier {
        BracketTier {
            lower,
            upper,
            rate,
            deduction: Decimal::ZERO,
        }
    }

    fn valid_table() -> BracketTable {
        BracketTable::new(vec![
            tier(dec!(0), Some(dec!(1212.00)), dec!(7.5)),
            tier(dec!(1212.01), Some(dec!(2427.35)), dec!(9)),
            tier(dec!(2427.36), None, dec!(12)),
        ])
    }

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_well_formed_table() {
        let result = valid_table().validate();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn validate_rejects_empty_table() {
        let table = BracketTable::new(vec![]);

        assert_eq!(table.validate(), Err(BracketTableError::Empty));
    }

    #[test]
    fn validate_rejects_negative_lower_bound() {
        let table = BracketTable::new(vec![tier(dec!(-1), None, dec!(7.5))]);

        assert_eq!(
            table.validate(),
            Err(BracketTableError::NegativeLowerBound {
                index: 0,
                lower: dec!(-1),
            })
        );
    }

    #[test]
    fn validate_rejects_upper_at_or_below_lower() {
        let table = BracketTable::new(vec![tier(dec!(100), Some(dec!(100)), dec!(7.5))]);

        assert_eq!(
            table.validate(),
            Err(BracketTableError::NonMonotonicBounds { index: 0 })
        );
    }

    #[test]
    fn validate_rejects_overlapping_tiers() {
        let table = BracketTable::new(vec![
            tier(dec!(0), Some(dec!(1212.00)), dec!(7.5)),
            tier(dec!(1000.00), Some(dec!(2427.35)), dec!(9)),
        ]);

        assert_eq!(
            table.validate(),
            Err(BracketTableError::NonMonotonicBounds { index: 1 })
        );
    }

    #[test]
    fn validate_rejects_open_ended_tier_before_last() {
        let table = BracketTable::new(vec![
            tier(dec!(0), None, dec!(7.5)),
            tier(dec!(1212.01), Some(dec!(2427.35)), dec!(9)),
        ]);

        assert_eq!(
            table.validate(),
            Err(BracketTableError::OpenEndedNotLast { index: 0 })
        );
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let table = BracketTable::new(vec![tier(dec!(0), None, dec!(-7.5))]);

        assert_eq!(
            table.validate(),
            Err(BracketTableError::NegativeRate {
                index: 0,
                rate: dec!(-7.5),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_fixed_deduction() {
        let table = BracketTable::new(vec![BracketTier {
            lower: dec!(0),
            upper: None,
            rate: dec!(7.5),
            deduction: dec!(-142.80),
        }]);

        assert_eq!(
            table.validate(),
            Err(BracketTableError::NegativeDeduction {
                index: 0,
                deduction: dec!(-142.80),
            })
        );
    }

    #[test]
    fn validate_accepts_fully_bounded_table() {
        let table = BracketTable::new(vec![
            tier(dec!(0), Some(dec!(1212.00)), dec!(7.5)),
            tier(dec!(1212.01), Some(dec!(2427.35)), dec!(9)),
        ]);

        assert_eq!(table.validate(), Ok(()));
    }

    // =========================================================================
    // contains / label tests
    // =========================================================================

    #[test]
    fn contains_is_inclusive_on_both_bounds() {
        let t = tier(dec!(1212.01), Some(dec!(2427.35)), dec!(9));

        assert!(t.contains(dec!(1212.01)));
        assert!(t.contains(dec!(2427.35)));
        assert!(!t.contains(dec!(1212.00)));
        assert!(!t.contains(dec!(2427.36)));
    }

    #[test]
    fn contains_open_ended_has_no_ceiling() {
        let t = tier(dec!(4664.69), None, dec!(27.5));

        assert!(t.contains(dec!(4664.69)));
        assert!(t.contains(dec!(1000000)));
        assert!(!t.contains(dec!(4664.68)));
    }

    #[test]
    fn label_formats_bounded_and_open_ended_tiers() {
        assert_eq!(
            tier(dec!(1212.01), Some(dec!(2427.35)), dec!(9)).label(),
            "1212.01 - 2427.35"
        );
        assert_eq!(tier(dec!(4664.69), None, dec!(27.5)).label(), "4664.69 - ∞");
    }
}
