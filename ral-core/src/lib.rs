//! Net salary calculation for Italian employees (Lombardy / Milan, tax year 2026).
//!
//! The crate turns a gross annual salary (RAL) into a full breakdown of
//! social contributions, national income tax (IRPEF), tax credits, the
//! non-taxable low-income bonus, regional and municipal surtaxes, and the
//! resulting net annual and monthly pay.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ral_core::{MonthlyPayments, compute_salary};
//!
//! let result = compute_salary(dec!(30000), MonthlyPayments::Twelve).unwrap();
//!
//! assert_eq!(result.taxable_income, dec!(27243));
//! assert_eq!(result.net_annual_salary.round_dp(2), dec!(23360.52));
//! ```

pub mod calculations;
pub mod models;

pub use calculations::{SalaryError, SalaryWorksheet, compute_salary};
pub use models::*;
