//! Payroll calculation stages, one module per pipeline step.

pub mod common;
pub mod contribution;
pub mod deductions;
pub mod earnings;
pub mod employer;
pub mod income_tax;
pub mod statement;

pub use contribution::{ContributionBreakdown, TierContribution, withhold_contribution};
pub use deductions::{DeductionBreakdown, compute_deductions};
pub use earnings::{EarningsBreakdown, compute_earnings};
pub use employer::{EmployerCost, compute_employer_cost};
pub use income_tax::{TaxAssessment, withhold_income_tax};
pub use statement::{IncomeStatement, StatementRow, compose_statement};
