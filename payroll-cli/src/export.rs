//! CSV export of the itemized pay statement.
//!
//! One row per line, earnings first, with the side recorded in the first
//! column. Semicolon-separated, matching the spreadsheet-friendly format
//! the statement has always been exported in.

use std::io;

use payroll_core::{LineItem, PayrollResult};

/// Writes the itemization to `writer`.
pub fn write_statement<W: io::Write>(
    writer: W,
    result: &PayrollResult,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    csv_writer.write_record(["kind", "description", "basis", "rate", "amount"])?;
    for line in &result.earnings {
        write_line(&mut csv_writer, "earning", line)?;
    }
    for line in &result.deductions {
        write_line(&mut csv_writer, "deduction", line)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_line<W: io::Write>(
    csv_writer: &mut csv::Writer<W>,
    kind: &str,
    line: &LineItem,
) -> Result<(), csv::Error> {
    let rate = line.rate.map(|rate| format!("{rate}%")).unwrap_or_default();
    let basis = line.basis.to_string();
    let amount = format!("{:.2}", line.amount);
    csv_writer.write_record([
        kind,
        line.description.as_str(),
        basis.as_str(),
        rate.as_str(),
        amount.as_str(),
    ])?;
    Ok(())
}
