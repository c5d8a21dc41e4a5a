//! Built-in withholding schedules, used when no user table is supplied or
//! when a supplied table fails to load.
//!
//! Values are the 2022 Brazilian schedules: the INSS employee-contribution
//! table (marginal mode) and the IRRF monthly withholding table (lookup
//! mode with per-tier subtraction constants).

use payroll_core::{BracketTable, BracketTier};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default marginal contribution schedule.
pub fn contribution_table() -> BracketTable {
    BracketTable::new(vec![
        tier(dec!(0), Some(dec!(1212.00)), dec!(7.5), dec!(0)),
        tier(dec!(1212.01), Some(dec!(2427.35)), dec!(9), dec!(0)),
        tier(dec!(2427.36), Some(dec!(3641.03)), dec!(12), dec!(0)),
        tier(dec!(3641.04), Some(dec!(7087.22)), dec!(14), dec!(0)),
    ])
}

/// Default lookup tax schedule.
pub fn tax_table() -> BracketTable {
    BracketTable::new(vec![
        tier(dec!(0), Some(dec!(1903.98)), dec!(0), dec!(0)),
        tier(dec!(1903.99), Some(dec!(2826.65)), dec!(7.5), dec!(142.80)),
        tier(dec!(2826.66), Some(dec!(3751.05)), dec!(15), dec!(354.80)),
        tier(dec!(3751.06), Some(dec!(4664.68)), dec!(22.5), dec!(636.13)),
        tier(dec!(4664.69), None, dec!(27.5), dec!(869.36)),
    ])
}

fn tier(
    lower: Decimal,
    upper: Option<Decimal>,
    rate: Decimal,
    deduction: Decimal,
) -> BracketTier {
    BracketTier {
        lower,
        upper,
        rate,
        deduction,
    }
}
