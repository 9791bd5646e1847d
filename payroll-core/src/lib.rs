pub mod calculations;
pub mod models;

pub use calculations::{
    IncomeTaxPolicy, PayrollConfig, PayrollConfigError, SalaryCalculator, compute,
};
pub use models::*;
