//! Text-mode front ends for the salary form.
//!
//! [`run_interactive`] plays the role of the form screen: it prompts for the
//! two fields, shows the breakdown or the validation message, and offers to
//! calculate again for the same worker, start a new calculation or quit. [`run_once`] and [`run_batch`] back the
//! non-interactive command-line modes.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use payroll_core::SalaryCalculator;
use tracing::{debug, info};

use crate::csv_loader;
use crate::models::SalaryReport;
use crate::state::{FormAction, FormState};

const NAME_PROMPT: &str = "Worker full name: ";
const SALARY_PROMPT: &str = "Monthly salary: ";
const MENU_PROMPT: &str = "[c]alculate again, [n]ew calculation or [q]uit: ";

/// What the user picked after a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    /// Keep the name, ask for another salary.
    Again,
    New,
    Quit,
}

/// Prints `prompt` and reads one line. `None` means end of input.
fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn read_menu_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<MenuChoice> {
    loop {
        let Some(answer) = read_field(input, output, MENU_PROMPT)? else {
            return Ok(MenuChoice::Quit);
        };
        match answer.trim().to_ascii_lowercase().as_str() {
            "c" | "calculate" => return Ok(MenuChoice::Again),
            "n" | "new" => return Ok(MenuChoice::New),
            "q" | "quit" | "exit" => return Ok(MenuChoice::Quit),
            other => writeln!(output, "Unknown option '{other}'.")?,
        }
    }
}

/// Runs the interactive form until the user quits or input ends.
///
/// A validation failure re-prompts both fields without clearing the
/// previous answers from the state. "Calculate again" keeps the name and
/// only asks for a new salary; "new" resets the form.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    calculator: &SalaryCalculator,
) -> io::Result<()> {
    writeln!(output, "Enter the worker's details.")?;
    let mut state = FormState::default();
    let mut keep_name = false;

    loop {
        if !keep_name {
            let Some(name) = read_field(&mut input, &mut output, NAME_PROMPT)? else {
                break;
            };
            state = state.apply(FormAction::EditName(name), calculator);
        }
        let Some(salary) = read_field(&mut input, &mut output, SALARY_PROMPT)? else {
            break;
        };
        keep_name = false;

        state = state
            .apply(FormAction::EditSalary(salary), calculator)
            .apply(FormAction::Calculate, calculator);

        if let Some(error) = &state.error {
            writeln!(output, "Error: {error}.")?;
            continue;
        }
        if let Some(report) = state.report() {
            writeln!(output)?;
            writeln!(output, "{report}")?;
            writeln!(output)?;
        }

        match read_menu_choice(&mut input, &mut output)? {
            MenuChoice::Again => keep_name = true,
            MenuChoice::New => {
                state = state.apply(FormAction::Reset, calculator);
            }
            MenuChoice::Quit => break,
        }
    }

    debug!("interactive session finished");
    Ok(())
}

/// Computes a single worker and prints the report to `output`.
///
/// # Errors
///
/// Fails with the validation message when the input is rejected.
pub fn run_once<W: Write>(
    output: &mut W,
    calculator: &SalaryCalculator,
    name: &str,
    salary: &str,
) -> Result<()> {
    let result = calculator
        .compute_from_text(name, salary)
        .context("cannot compute deductions")?;
    writeln!(output, "{}", SalaryReport::new(name, &result))?;
    Ok(())
}

/// Computes every worker in a CSV file and writes the CSV report to `output`.
pub fn run_batch<W: Write>(
    output: W,
    calculator: &SalaryCalculator,
    path: &Path,
) -> Result<()> {
    info!(path = %path.display(), "loading workers");
    let records = csv_loader::load_from_file(path)
        .with_context(|| format!("Failed to read workers from: {}", path.display()))?;

    let outcomes = csv_loader::compute_batch(calculator, &records);
    csv_loader::write_report(output, &outcomes).context("Failed to write batch report")?;
    Ok(())
}
