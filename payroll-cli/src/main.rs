//! Command-line front end: reads a payroll-inputs JSON file, loads
//! optional user bracket tables (falling back to the built-in defaults),
//! runs the calculation, prints the report, and optionally exports the
//! itemization as CSV.

mod export;
mod report;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use payroll_core::{PayrollCalculator, PayrollConfig, PayrollInputs};
use payroll_data::{LoadedTable, load_or_default};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Calculate a monthly pay statement from a JSON inputs file.
///
/// Bracket tables default to the built-in 2022 schedules; pass
/// --contribution-table / --tax-table to use hand-edited JSON tables. A
/// table that fails to parse or validate is replaced by the default with a
/// warning, never a hard error.
#[derive(Parser, Debug)]
#[command(name = "payroll")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the payroll inputs JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to a JSON contribution (marginal) bracket table
    #[arg(long)]
    contribution_table: Option<PathBuf>,

    /// Path to a JSON income-tax (lookup) bracket table
    #[arg(long)]
    tax_table: Option<PathBuf>,

    /// Tax-base deduction per dependent
    #[arg(long, default_value = "189.59")]
    dependent_deduction: Decimal,

    /// Severance-fund rate in percent
    #[arg(long, default_value = "8")]
    fund_rate: Decimal,

    /// Employer contribution rate in percent
    #[arg(long, default_value = "20")]
    employer_rate: Decimal,

    /// Operating revenue for the income statement
    #[arg(long, default_value = "0")]
    revenue: Decimal,

    /// Other expenses for the income statement
    #[arg(long, default_value = "0")]
    other_expenses: Decimal,

    /// Write the itemized statement to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let input_text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read inputs file: {}", args.input.display()))?;
    let inputs: PayrollInputs = serde_json::from_str(&input_text)
        .with_context(|| format!("failed to parse inputs file: {}", args.input.display()))?;

    let contribution = load_table(
        args.contribution_table.as_ref(),
        payroll_data::defaults::contribution_table(),
    )?;
    let tax = load_table(args.tax_table.as_ref(), payroll_data::defaults::tax_table())?;
    for loaded in [&contribution, &tax] {
        if let Some(warning) = &loaded.warning {
            eprintln!("warning: {warning}");
        }
    }

    let config = PayrollConfig {
        dependent_deduction: args.dependent_deduction,
        fund_rate_percent: args.fund_rate,
        employer_contribution_rate_percent: args.employer_rate,
    };
    let calculator = PayrollCalculator::with_config(&contribution.table, &tax.table, config);

    let (result, statement) = calculator
        .calculate_with_statement(&inputs, args.revenue, args.other_expenses)
        .context("calculation aborted")?;

    println!("Pay statement - {}", Local::now().format("%Y-%m-%d"));
    println!();
    println!("{}", report::render(&result, Some(&statement)));

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("failed to create CSV file: {}", path.display()))?;
        export::write_statement(file, &result)
            .with_context(|| format!("failed to write CSV file: {}", path.display()))?;
        info!(path = %path.display(), "itemized statement exported");
    }

    Ok(())
}

/// Reads a user table file when given, handing its text to the
/// fallback-aware loader. Only the file *read* can fail hard; bad table
/// content degrades to the default inside the loader.
fn load_table(
    path: Option<&PathBuf>,
    default: payroll_core::BracketTable,
) -> Result<LoadedTable> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read table file: {}", path.display()))?;
            Ok(load_or_default(&text, default))
        }
        None => Ok(LoadedTable {
            table: default,
            source: payroll_data::TableSource::DefaultFallback,
            warning: None,
        }),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
