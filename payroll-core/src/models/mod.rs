mod bracket;
mod inputs;
mod line;

pub use bracket::{BracketTable, BracketTableError, BracketTier};
pub use inputs::{InputError, PayrollInputs, TransportDeduction};
pub use line::{LineBasis, LineItem};
