mod salary_input;
mod salary_result;
mod tax_bracket;
mod validation;

pub use salary_input::{MAX_GROSS_SALARY, SalaryInput};
pub use salary_result::SalaryResult;
pub use tax_bracket::TaxBracket;
pub use validation::{ValidationError, ValidationOrder};
