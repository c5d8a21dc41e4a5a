//! Bracket-table configuration: built-in default schedules and loading of
//! user-edited table text.
//!
//! Tables reach the calculator as structured data parsed from free-form
//! JSON the user may have hand-edited. Anything wrong with that text
//! (syntax, shape, or a violated table invariant) downgrades to the
//! built-in default table with a warning rather than failing the
//! calculation.

pub mod defaults;
pub mod loader;

pub use loader::{LoadedTable, TableLoadError, TableSource, load_or_default, parse_table};
