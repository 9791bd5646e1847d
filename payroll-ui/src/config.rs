//! TOML configuration for the payroll calculator.
//!
//! Every key is optional; missing keys fall back to the built-in defaults
//! (7% INSS, progressive IR, name checked first).
//!
//! ```toml
//! social_security_rate = 0.07
//! validation_order = "name_first"     # or "salary_first"
//!
//! [income_tax]
//! kind = "flat_threshold"
//! threshold = 30000
//! rate = 0.15
//! ```
//!
//! A progressive schedule is written as an array of brackets:
//!
//! ```toml
//! [income_tax]
//! kind = "progressive_annual"
//!
//! [[income_tax.brackets]]
//! min_income = 0
//! max_income = 100000
//! tax_rate = 0
//! base_tax = 0
//!
//! [[income_tax.brackets]]
//! min_income = 100000
//! tax_rate = 0.15
//! base_tax = 0
//! ```

use std::path::Path;

use payroll_core::{PayrollConfig, PayrollConfigError};
use tracing::info;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config values: {0}")]
    Invalid(#[from] PayrollConfigError),
}

/// Parses and validates configuration text.
///
/// # Errors
///
/// * [`ConfigLoadError::Parse`] if the TOML is malformed or has unknown values.
/// * [`ConfigLoadError::Invalid`] if the rates or brackets are out of range.
pub fn load_from_str(input: &str) -> Result<PayrollConfig, ConfigLoadError> {
    let config: PayrollConfig = toml::from_str(input)?;
    config.validate()?;
    Ok(config)
}

/// Reads a configuration file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<PayrollConfig, ConfigLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config = load_from_str(&contents)?;
    info!(path = %path.display(), "loaded payroll configuration");
    Ok(config)
}
