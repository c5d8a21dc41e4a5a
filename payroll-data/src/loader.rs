//! Parsing of user-editable bracket-table text.
//!
//! The wire format is a JSON array of tier objects:
//!
//! ```json
//! [
//!   {"min": 0.0, "max": 1903.98, "rate": 0.0},
//!   {"min": 1903.99, "max": null, "rate": 7.5, "deduction": 142.80}
//! ]
//! ```
//!
//! `max: null` (or an absent `max`) marks the open-ended top tier;
//! `deduction` is optional and defaults to zero. A parsed table is
//! validated before it is accepted.

use payroll_core::{BracketTable, BracketTableError, BracketTier};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Why a user-supplied table was rejected.
#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("bracket table JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bracket table is invalid: {0}")]
    Invalid(#[from] BracketTableError),
}

/// One tier object as it appears in the user-edited JSON.
#[derive(Debug, Deserialize)]
struct TierRecord {
    min: Decimal,
    #[serde(default)]
    max: Option<Decimal>,
    rate: Decimal,
    #[serde(default)]
    deduction: Decimal,
}

impl From<TierRecord> for BracketTier {
    fn from(record: TierRecord) -> Self {
        BracketTier {
            lower: record.min,
            upper: record.max,
            rate: record.rate,
            deduction: record.deduction,
        }
    }
}

/// Parses and validates bracket-table text.
///
/// # Errors
///
/// Returns [`TableLoadError`] when the text is not a JSON array of tier
/// objects or the resulting table violates a table invariant.
pub fn parse_table(text: &str) -> Result<BracketTable, TableLoadError> {
    let records: Vec<TierRecord> = serde_json::from_str(text)?;
    let table = BracketTable::new(records.into_iter().map(BracketTier::from).collect());
    table.validate()?;
    Ok(table)
}

/// Where the effective table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    UserSupplied,
    DefaultFallback,
}

/// The effective table plus how it was obtained. `warning` is set exactly
/// when the user text was rejected and the default was substituted.
#[derive(Debug)]
pub struct LoadedTable {
    pub table: BracketTable,
    pub source: TableSource,
    pub warning: Option<String>,
}

/// Loads a table from user text, substituting `default` on any failure.
///
/// This never errors: a malformed table is a degraded configuration, not a
/// failed calculation. The rejection reason is logged and carried in the
/// returned [`LoadedTable::warning`] so callers can surface it.
pub fn load_or_default(
    text: &str,
    default: BracketTable,
) -> LoadedTable {
    match parse_table(text) {
        Ok(table) => LoadedTable {
            table,
            source: TableSource::UserSupplied,
            warning: None,
        },
        Err(error) => {
            warn!(%error, "bracket table rejected, using the default table");
            LoadedTable {
                table: default,
                source: TableSource::DefaultFallback,
                warning: Some(format!("bracket table rejected ({error}); default table used")),
            }
        }
    }
}
