//! The payroll pipeline: earnings, the two withholding stages, deductions,
//! employer cost, and optionally the simplified income statement.
//!
//! Data flows strictly forward. Each stage produces a new value; nothing
//! is mutated after it is computed, and a finished [`PayrollResult`] is
//! superseded, never updated, by the next calculation.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::{BracketTable, BracketTier, PayrollCalculator, PayrollInputs};
//!
//! let contribution = BracketTable::new(vec![
//!     BracketTier { lower: dec!(0), upper: Some(dec!(1212.00)), rate: dec!(7.5), deduction: dec!(0) },
//!     BracketTier { lower: dec!(1212.01), upper: None, rate: dec!(9), deduction: dec!(0) },
//! ]);
//! let tax = BracketTable::new(vec![
//!     BracketTier { lower: dec!(0), upper: Some(dec!(1903.98)), rate: dec!(0), deduction: dec!(0) },
//!     BracketTier { lower: dec!(1903.99), upper: None, rate: dec!(7.5), deduction: dec!(142.80) },
//! ]);
//!
//! let calculator = PayrollCalculator::new(&contribution, &tax);
//! let inputs = PayrollInputs {
//!     base_salary: dec!(3500.00),
//!     ..PayrollInputs::default()
//! };
//!
//! let result = calculator.calculate(&inputs).unwrap();
//!
//! assert_eq!(result.gross_pay, dec!(3500.00));
//! assert_eq!(result.net_pay, result.gross_pay - result.deduction_total);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::{
    ContributionBreakdown, EmployerCost, IncomeStatement, TaxAssessment, compose_statement,
    compute_deductions, compute_earnings, compute_employer_cost, withhold_contribution,
    withhold_income_tax,
};
use crate::models::{BracketTable, InputError, LineItem, PayrollInputs};

/// Site-wide parameters that are not per-employee inputs: the per-head
/// dependent deduction and the employer-side rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Amount deducted from the tax base per dependent.
    pub dependent_deduction: Decimal,
    /// Severance-fund rate as a percentage of gross pay.
    pub fund_rate_percent: Decimal,
    /// Employer social-contribution rate as a percentage of gross pay.
    pub employer_contribution_rate_percent: Decimal,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            dependent_deduction: Decimal::new(18959, 2),
            fund_rate_percent: Decimal::from(8),
            employer_contribution_rate_percent: Decimal::from(20),
        }
    }
}

/// Everything one calculation produced, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    pub hourly_rate: Decimal,
    pub earnings: Vec<LineItem>,
    pub gross_pay: Decimal,
    pub contribution: ContributionBreakdown,
    pub tax: TaxAssessment,
    pub deductions: Vec<LineItem>,
    pub deduction_total: Decimal,
    /// Gross pay minus all deductions. Negative when deductions exceed
    /// gross pay; that is a real outcome, not an error.
    pub net_pay: Decimal,
    pub employer_cost: EmployerCost,
}

/// Runs the pipeline against a pair of validated bracket tables.
///
/// The tables are borrowed for the calculator's lifetime and treated as
/// immutable configuration; validation happens at the configuration
/// boundary, not here.
#[derive(Debug, Clone)]
pub struct PayrollCalculator<'a> {
    contribution_table: &'a BracketTable,
    tax_table: &'a BracketTable,
    config: PayrollConfig,
}

impl<'a> PayrollCalculator<'a> {
    pub fn new(
        contribution_table: &'a BracketTable,
        tax_table: &'a BracketTable,
    ) -> Self {
        Self::with_config(contribution_table, tax_table, PayrollConfig::default())
    }

    pub fn with_config(
        contribution_table: &'a BracketTable,
        tax_table: &'a BracketTable,
        config: PayrollConfig,
    ) -> Self {
        Self {
            contribution_table,
            tax_table,
            config,
        }
    }

    /// Runs one full calculation.
    ///
    /// The contribution is withheld on gross pay; the tax base is gross
    /// pay minus that contribution, further reduced by the dependent and
    /// alimony deductions inside the lookup.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the inputs fail validation; no partial
    /// result is produced.
    pub fn calculate(
        &self,
        inputs: &PayrollInputs,
    ) -> Result<PayrollResult, InputError> {
        inputs.validate()?;

        let earnings = compute_earnings(inputs);
        let contribution = withhold_contribution(earnings.gross_pay, self.contribution_table);
        let tax = withhold_income_tax(
            earnings.gross_pay - contribution.total,
            self.tax_table,
            self.config.dependent_deduction,
            inputs.dependents,
            inputs.alimony,
        );
        let deductions = compute_deductions(
            inputs,
            earnings.gross_pay,
            earnings.hourly_rate,
            &contribution,
            &tax,
        );
        let net_pay = earnings.gross_pay - deductions.total;
        let employer_cost = compute_employer_cost(
            inputs.base_salary,
            earnings.gross_pay,
            self.config.fund_rate_percent,
            self.config.employer_contribution_rate_percent,
        );

        Ok(PayrollResult {
            hourly_rate: earnings.hourly_rate,
            earnings: earnings.lines,
            gross_pay: earnings.gross_pay,
            contribution,
            tax,
            deductions: deductions.lines,
            deduction_total: deductions.total,
            net_pay,
            employer_cost,
        })
    }

    /// Like [`calculate`](Self::calculate), additionally composing the
    /// simplified income statement from the computed employer cost.
    pub fn calculate_with_statement(
        &self,
        inputs: &PayrollInputs,
        revenue: Decimal,
        other_expenses: Decimal,
    ) -> Result<(PayrollResult, IncomeStatement), InputError> {
        let result = self.calculate(inputs)?;
        let statement = compose_statement(result.employer_cost.total, revenue, other_expenses);
        Ok((result, statement))
    }
}
