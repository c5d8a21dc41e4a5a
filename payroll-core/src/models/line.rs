//! Itemized pay-statement lines.
//!
//! The same value type serves both sides of the statement: earnings and
//! deductions have identical shape, and presentation order is insertion
//! order (base salary first, then overtime, premiums, benefits, other).

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a line's amount was computed from: a plain monetary base or a
/// display formula such as `"15.91 x 5"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBasis {
    Amount(Decimal),
    Formula(String),
}

impl fmt::Display for LineBasis {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            LineBasis::Amount(amount) => write!(f, "{amount:.2}"),
            LineBasis::Formula(formula) => f.write_str(formula),
        }
    }
}

/// One earnings or deduction line, immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub basis: LineBasis,
    /// Rate as a percentage, when the line is rate-driven.
    pub rate: Option<Decimal>,
    pub amount: Decimal,
}

impl LineItem {
    /// A line whose amount is its own basis (flat amounts, pass-throughs).
    pub fn flat(
        description: &str,
        amount: Decimal,
    ) -> Self {
        Self {
            description: description.to_string(),
            basis: LineBasis::Amount(amount),
            rate: None,
            amount,
        }
    }

    /// A rate-driven line computed from a monetary base.
    pub fn rated(
        description: &str,
        basis: Decimal,
        rate: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            description: description.to_string(),
            basis: LineBasis::Amount(basis),
            rate: Some(rate),
            amount,
        }
    }

    /// A line whose basis is a display formula rather than a single amount.
    pub fn derived(
        description: &str,
        formula: String,
        rate: Option<Decimal>,
        amount: Decimal,
    ) -> Self {
        Self {
            description: description.to_string(),
            basis: LineBasis::Formula(formula),
            rate,
            amount,
        }
    }
}
