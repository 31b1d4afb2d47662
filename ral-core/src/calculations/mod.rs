//! Salary calculation steps.
//!
//! Each step is a pure function of its inputs and the policy constants in a
//! [`TaxRegime`](crate::TaxRegime); [`SalaryWorksheet`] chains them into the
//! full gross-to-net breakdown.

pub mod common;
pub mod contributions;
pub mod deductions;
pub mod progressive;
pub mod salary;
pub mod surtax;

pub use contributions::compute_contributions;
pub use deductions::{employment_tax_credit, low_income_bonus, secondary_tax_credit};
pub use progressive::{BracketTax, apply_brackets};
pub use salary::{SalaryError, SalaryWorksheet, compute_salary};
pub use surtax::{municipal_surtax, regional_surtax};
