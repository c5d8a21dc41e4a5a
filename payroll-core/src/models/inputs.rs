//! User-entered payroll parameters for one calculation run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal input problems. When any of these is present the pipeline must not
/// run and no partial result is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The base salary is below zero.
    #[error("base salary must not be negative, got {0}")]
    NegativeBaseSalary(Decimal),

    /// Normal monthly hours is used as a divisor and must be positive.
    #[error("normal monthly hours must be positive, got {0}")]
    NonPositiveNormalHours(Decimal),

    /// Working days in month is used as a divisor and must be positive.
    #[error("working days in month must be positive")]
    ZeroWorkingDays,
}

/// How the transport benefit is charged back to the employee. The two modes
/// are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportDeduction {
    /// Percentage of the base salary (the statutory mode, typically 6%).
    Percent(Decimal),
    /// Flat monthly amount.
    Fixed(Decimal),
}

/// All scalars entered on the payroll form.
///
/// Monetary fields are monthly amounts; percentage fields are expressed as
/// percentages (20 means 20%). The hazard and unhealthy premiums apply only
/// when present: `Some(rate)` means the premium is enabled at that rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollInputs {
    pub base_salary: Decimal,
    pub working_days_in_month: u32,
    pub normal_monthly_hours: Decimal,

    /// Overtime paid at 1.5x the hourly rate.
    pub overtime_hours_50: Decimal,
    /// Overtime paid at 2.0x the hourly rate.
    pub overtime_hours_100: Decimal,

    /// Explicit hourly rate. When absent or zero the rate is derived from
    /// base salary and normal monthly hours.
    pub hourly_rate_override: Option<Decimal>,

    pub night_hours: Decimal,
    pub night_premium_percent: Decimal,

    pub hazard_premium_percent: Option<Decimal>,
    pub unhealthy_premium_percent: Option<Decimal>,

    pub dependents: u32,
    pub alimony: Decimal,

    pub transport: Option<TransportDeduction>,
    pub meal_benefit: Decimal,

    pub absence_days: u32,
    pub tardiness_minutes: u32,

    pub other_earnings: Decimal,
}

impl Default for PayrollInputs {
    fn default() -> Self {
        Self {
            base_salary: Decimal::ZERO,
            working_days_in_month: 30,
            normal_monthly_hours: Decimal::from(220),
            overtime_hours_50: Decimal::ZERO,
            overtime_hours_100: Decimal::ZERO,
            hourly_rate_override: None,
            night_hours: Decimal::ZERO,
            night_premium_percent: Decimal::ZERO,
            hazard_premium_percent: None,
            unhealthy_premium_percent: None,
            dependents: 0,
            alimony: Decimal::ZERO,
            transport: None,
            meal_benefit: Decimal::ZERO,
            absence_days: 0,
            tardiness_minutes: 0,
            other_earnings: Decimal::ZERO,
        }
    }
}

impl PayrollInputs {
    /// Checks the preconditions every downstream formula relies on.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the base salary is negative or either
    /// divisor (normal monthly hours, working days in month) is not
    /// positive.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.base_salary < Decimal::ZERO {
            return Err(InputError::NegativeBaseSalary(self.base_salary));
        }
        if self.normal_monthly_hours <= Decimal::ZERO {
            return Err(InputError::NonPositiveNormalHours(
                self.normal_monthly_hours,
            ));
        }
        if self.working_days_in_month == 0 {
            return Err(InputError::ZeroWorkingDays);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn validate_accepts_defaults() {
        let inputs = PayrollInputs::default();

        assert_eq!(inputs.validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_zero_base_salary() {
        let inputs = PayrollInputs {
            base_salary: dec!(0),
            ..PayrollInputs::default()
        };

        assert_eq!(inputs.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_base_salary() {
        let inputs = PayrollInputs {
            base_salary: dec!(-1),
            ..PayrollInputs::default()
        };

        assert_eq!(
            inputs.validate(),
            Err(InputError::NegativeBaseSalary(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_zero_normal_hours() {
        let inputs = PayrollInputs {
            normal_monthly_hours: dec!(0),
            ..PayrollInputs::default()
        };

        assert_eq!(
            inputs.validate(),
            Err(InputError::NonPositiveNormalHours(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_zero_working_days() {
        let inputs = PayrollInputs {
            working_days_in_month: 0,
            ..PayrollInputs::default()
        };

        assert_eq!(inputs.validate(), Err(InputError::ZeroWorkingDays));
    }

    #[test]
    fn deserializes_from_partial_json() {
        let inputs: PayrollInputs =
            serde_json::from_str(r#"{"base_salary": 3500.00, "dependents": 1}"#)
                .expect("partial inputs should deserialize");

        assert_eq!(inputs.base_salary, dec!(3500.00));
        assert_eq!(inputs.dependents, 1);
        assert_eq!(inputs.normal_monthly_hours, dec!(220));
        assert_eq!(inputs.working_days_in_month, 30);
    }

    #[test]
    fn transport_modes_round_trip_through_json() {
        let percent: TransportDeduction =
            serde_json::from_str(r#"{"percent": 6.0}"#).expect("percent mode");
        let fixed: TransportDeduction =
            serde_json::from_str(r#"{"fixed": 180.00}"#).expect("fixed mode");

        assert_eq!(percent, TransportDeduction::Percent(dec!(6.0)));
        assert_eq!(fixed, TransportDeduction::Fixed(dec!(180.00)));
    }
}
