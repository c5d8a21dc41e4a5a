pub mod calculations;
pub mod calculator;
pub mod models;

pub use calculator::{PayrollCalculator, PayrollConfig, PayrollResult};
pub use models::*;
