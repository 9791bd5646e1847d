use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use payroll_core::{IncomeTaxPolicy, PayrollConfig, ValidationOrder};

use crate::config::{self, ConfigLoadError};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Payroll deduction calculator.
///
/// Computes the social-security contribution (INSS), income tax (IR) and net
/// salary for a worker's gross monthly salary. Without `--name`/`--salary` or
/// `--batch` it starts an interactive prompt.
#[derive(Debug, Parser)]
#[command(name = "payroll", version, about)]
pub struct Cli {
    /// Worker's full name (one-shot mode).
    #[arg(long, requires = "salary")]
    pub name: Option<String>,

    /// Gross monthly salary (one-shot mode).
    #[arg(long, requires = "name", allow_hyphen_values = true)]
    pub salary: Option<String>,

    /// CSV file with `name,salary` columns; prints a CSV report.
    #[arg(long, conflicts_with_all = ["name", "salary"])]
    pub batch: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Income tax policy; overrides the configuration file.
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Which field is reported first when both are invalid; overrides the
    /// configuration file.
    #[arg(long, value_enum)]
    pub validation_order: Option<ValidationOrderArg>,

    /// Maximum log level; overrides RUST_LOG. Defaults to RUST_LOG or `info`.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Also append log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not print log records to the console.
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// 15% of the whole salary above 30,000 a month.
    Flat,
    /// Annual brackets on the salary net of INSS.
    Progressive,
}

impl From<PolicyArg> for IncomeTaxPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Flat => IncomeTaxPolicy::default_flat(),
            PolicyArg::Progressive => IncomeTaxPolicy::default_progressive(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidationOrderArg {
    NameFirst,
    SalaryFirst,
}

impl From<ValidationOrderArg> for ValidationOrder {
    fn from(arg: ValidationOrderArg) -> Self {
        match arg {
            ValidationOrderArg::NameFirst => ValidationOrder::NameFirst,
            ValidationOrderArg::SalaryFirst => ValidationOrder::SalaryFirst,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Off => LevelFilter::OFF,
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl Cli {
    /// Builds the effective configuration: file values (or defaults) with
    /// command-line overrides applied on top.
    pub fn resolve_config(&self) -> Result<PayrollConfig, ConfigLoadError> {
        let mut config = match &self.config {
            Some(path) => config::load_from_file(path)?,
            None => PayrollConfig::default(),
        };
        if let Some(policy) = self.policy {
            config.income_tax = policy.into();
        }
        if let Some(order) = self.validation_order {
            config.validation_order = order.into();
        }
        Ok(config)
    }
}
