//! Payroll deduction calculations.
//!
//! This module provides the social-security contribution (INSS), the income
//! tax (IR) policies and the calculator that combines them into a
//! [`SalaryResult`](crate::SalaryResult).

pub mod calculator;
pub mod common;
pub mod config;
pub mod income_tax;

#[cfg(test)]
mod calculator_proptest;

pub use calculator::{SalaryCalculator, compute};
pub use config::{PayrollConfig, PayrollConfigError};
pub use income_tax::IncomeTaxPolicy;
