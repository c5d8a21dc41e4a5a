//! Text rendering of a calculation: the six report sections in
//! presentation order, matching the on-screen layout the result is meant
//! for.

use std::fmt::Write;

use payroll_core::calculations::IncomeStatement;
use payroll_core::{LineItem, PayrollResult};
use rust_decimal::Decimal;

const LINE_WIDTH: usize = 72;

/// Renders the full report. `statement` is appended as the last section
/// when present.
pub fn render(
    result: &PayrollResult,
    statement: Option<&IncomeStatement>,
) -> String {
    let mut out = String::new();

    section(&mut out, "1) Earnings and gross pay");
    let _ = writeln!(out, "Hourly rate: {:.2}", result.hourly_rate);
    line_table(&mut out, &result.earnings);
    let _ = writeln!(out, "{:>LINE_WIDTH$}", format!("Gross pay: {}", money(result.gross_pay)));

    section(&mut out, "2) Contribution (marginal by tier)");
    for tier in &result.contribution.tiers {
        let _ = writeln!(
            out,
            "  {:<22} {:>12} {:>7}% {:>12}",
            tier.tier_label,
            money(tier.taxed_base),
            tier.rate,
            money(tier.amount),
        );
    }
    let _ = writeln!(
        out,
        "{:>LINE_WIDTH$}",
        format!("Contribution total: {}", money(result.contribution.total))
    );

    section(&mut out, "3) Income tax");
    let _ = writeln!(out, "Adjusted base: {}", money(result.tax.adjusted_base));
    let _ = writeln!(
        out,
        "Dependent deduction: {}",
        money(result.tax.dependent_deduction)
    );
    match &result.tax.applied_tier {
        Some(tier) => {
            let _ = writeln!(out, "Applied tier: {} at {}%", tier.label(), tier.rate);
        }
        None => {
            let _ = writeln!(out, "Applied tier: none (table did not cover the base)");
        }
    }
    let _ = writeln!(out, "{:>LINE_WIDTH$}", format!("Tax withheld: {}", money(result.tax.amount)));

    section(&mut out, "4) Deductions");
    line_table(&mut out, &result.deductions);
    let _ = writeln!(
        out,
        "{:>LINE_WIDTH$}",
        format!("Deduction total: {}", money(result.deduction_total))
    );

    section(&mut out, "5) Employer charges and provisions");
    let employer = &result.employer_cost;
    let _ = writeln!(out, "  {:<40} {:>12}", "Fund deposit", money(employer.fund_amount));
    let _ = writeln!(
        out,
        "  {:<40} {:>12}",
        "Employer contribution",
        money(employer.employer_contribution)
    );
    let _ = writeln!(out, "  {:<40} {:>12}", "13th-month accrual", money(employer.accrual_13th));
    let _ = writeln!(out, "  {:<40} {:>12}", "Vacation accrual", money(employer.accrual_vacation));
    let _ = writeln!(
        out,
        "  {:<40} {:>12}",
        "Vacation bonus accrual",
        money(employer.accrual_vacation_bonus)
    );
    let _ = writeln!(
        out,
        "{:>LINE_WIDTH$}",
        format!("Total employer cost: {}", money(employer.total))
    );

    section(&mut out, "6) Pay statement");
    let _ = writeln!(out, "Gross pay:       {}", money(result.gross_pay));
    let _ = writeln!(out, "Total deductions: {}", money(result.deduction_total));
    let _ = writeln!(out, "Net pay:         {}", money(result.net_pay));

    if let Some(statement) = statement {
        section(&mut out, "Income statement (simplified)");
        for row in &statement.rows {
            let _ = writeln!(
                out,
                "  {:<36} {:>12}  {}",
                row.account,
                money(row.amount),
                row.formula
            );
        }
    }

    out
}

fn section(
    out: &mut String,
    title: &str,
) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(LINE_WIDTH));
}

fn line_table(
    out: &mut String,
    lines: &[LineItem],
) {
    for line in lines {
        let rate = line
            .rate
            .map(|rate| format!("{rate}%"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<30} {:>16} {:>7} {:>12}",
            line.description,
            line.basis.to_string(),
            rate,
            money(line.amount),
        );
    }
}

fn money(value: Decimal) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use payroll_core::{PayrollCalculator, PayrollInputs};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_result() -> PayrollResult {
        let contribution = payroll_data::defaults::contribution_table();
        let tax = payroll_data::defaults::tax_table();
        let calculator = PayrollCalculator::new(&contribution, &tax);
        let inputs = PayrollInputs {
            base_salary: dec!(3500.00),
            ..PayrollInputs::default()
        };
        calculator.calculate(&inputs).expect("sample should calculate")
    }

    #[test]
    fn report_contains_all_six_sections() {
        let report = render(&sample_result(), None);

        for heading in [
            "1) Earnings and gross pay",
            "2) Contribution (marginal by tier)",
            "3) Income tax",
            "4) Deductions",
            "5) Employer charges and provisions",
            "6) Pay statement",
        ] {
            assert!(report.contains(heading), "missing section: {heading}");
        }
    }

    #[test]
    fn report_shows_rounded_amounts() {
        let report = render(&sample_result(), None);

        assert!(report.contains("Gross pay: 3500.00"));
        assert!(report.contains("Contribution total: 329.00"));
        assert!(report.contains("Net pay:         3050.15"));
    }

    #[test]
    fn statement_section_appears_only_when_supplied() {
        let result = sample_result();
        let statement = payroll_core::calculations::compose_statement(
            result.employer_cost.total,
            dec!(10000.00),
            dec!(0),
        );

        let without = render(&result, None);
        let with = render(&result, Some(&statement));

        assert!(!without.contains("Income statement"));
        assert!(with.contains("Income statement (simplified)"));
        assert!(with.contains("Operating result"));
    }

    #[test]
    fn negative_net_pay_is_rendered_verbatim() {
        let contribution = payroll_data::defaults::contribution_table();
        let tax = payroll_data::defaults::tax_table();
        let calculator = PayrollCalculator::new(&contribution, &tax);
        let inputs = PayrollInputs {
            base_salary: dec!(1000.00),
            alimony: dec!(2000.00),
            ..PayrollInputs::default()
        };
        let result = calculator.calculate(&inputs).expect("should calculate");

        let report = render(&result, None);

        assert!(result.net_pay < rust_decimal::Decimal::ZERO);
        assert!(report.contains(&format!("Net pay:         {:.2}", result.net_pay)));
    }

    #[test]
    fn every_contribution_tier_is_listed() {
        let report = render(&sample_result(), None);

        assert!(report.contains("0.00 - 1212.00"));
        assert!(report.contains("3641.04 - 7087.22"));
    }

    #[test]
    fn money_pads_to_cents() {
        assert_eq!(money(dec!(3500)), "3500.00");
        assert_eq!(money(dec!(-5.1)), "-5.10");
    }
}
