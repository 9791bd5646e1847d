use std::io;

use anyhow::Context;
use clap::Parser;
use payroll_core::SalaryCalculator;
use tracing::debug;

use payroll_ui::{Cli, app, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        logging::set_log_level(level.into())?;
    }
    if cli.quiet {
        logging::set_console_enabled(false)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = cli.resolve_config().context("Failed to load configuration")?;
    debug!(?config, "effective payroll configuration");
    let calculator = SalaryCalculator::new(config).context("Invalid payroll configuration")?;

    let stdout = io::stdout();
    match (&cli.batch, &cli.name, &cli.salary) {
        (Some(path), _, _) => app::run_batch(stdout.lock(), &calculator, path),
        (None, Some(name), Some(salary)) => {
            app::run_once(&mut stdout.lock(), &calculator, name, salary)
        }
        _ => {
            app::run_interactive(io::stdin().lock(), stdout.lock(), &calculator)?;
            Ok(())
        }
    }
}
