mod salary_report;

pub use salary_report::SalaryReport;
