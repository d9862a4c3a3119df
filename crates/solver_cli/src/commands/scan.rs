//! Scan command implementation
//!
//! Runs the interval scan on the built-in problem and prints one
//! diagnostic block per root.

use std::io::{self, BufRead, Write};

use clap::Args;
use serde_json::json;
use tracing::{info, warn};

use solver_core::problem::{Problem, QuadraticExp};
use solver_core::report::RootReport;
use solver_core::solvers::{BracketSolve, RootScanner, ScanConfig};

use crate::{CliError, Result};

/// Arguments for the scan command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Lower interval bound a (prompted when omitted)
    #[arg(short = 'a', long)]
    pub lower: Option<f64>,

    /// Upper interval bound b (prompted when omitted)
    #[arg(short = 'b', long)]
    pub upper: Option<f64>,

    /// Argument-space tolerance eps1 (prompted when omitted)
    #[arg(long)]
    pub eps_argument: Option<f64>,

    /// Function-space tolerance eps2 (prompted when omitted)
    #[arg(long)]
    pub eps_function: Option<f64>,

    /// Scan sub-interval width h
    #[arg(long, default_value_t = 7.0)]
    pub step: f64,

    /// Maximum Newton iterations per bracket
    #[arg(long, default_value_t = 100)]
    pub max_iterations: usize,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub wait: bool,
}

/// Run the scan command
pub fn run(args: &ScanArgs) -> Result<()> {
    let (lower, upper) = resolve_interval(args)?;
    let eps_argument = resolve_value(
        args.eps_argument,
        "Enter the required accuracy for root determination by argument (eps1): ",
    )?;
    let eps_function = resolve_value(
        args.eps_function,
        "Enter the required accuracy for root determination by function (eps2): ",
    )?;

    validate_positive("step", args.step)?;
    validate_positive("eps-argument", eps_argument)?;
    validate_positive("eps-function", eps_function)?;
    if args.max_iterations == 0 {
        return Err(CliError::InvalidArgument(
            "max-iterations must be > 0".to_string(),
        ));
    }

    let config = ScanConfig::new(args.step, eps_argument, eps_function, args.max_iterations);
    let scanner = RootScanner::new(config);
    let mut problem = QuadraticExp::new();

    info!("Scanning [{}, {}] with step {}", lower, upper, args.step);
    let solves = scanner.scan(&mut problem, lower, upper)?;
    info!(
        "Scan complete: {} bracket(s), {} evaluation(s)",
        solves.len(),
        Problem::<f64>::evaluations(&problem)
    );

    match args.format.as_str() {
        "table" => print_table(&solves),
        "json" => print_json(&solves)?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    if args.wait {
        print!("Press Enter to exit...");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}

fn print_table(solves: &[BracketSolve<f64>]) {
    if solves.is_empty() {
        println!("No sign changes detected.");
        return;
    }

    for solve in solves {
        match &solve.outcome {
            Ok(report) => print!("{}", format_report(report)),
            Err(err) => {
                warn!(
                    "Bracket [{}, {}] failed: {}",
                    solve.bracket.lo, solve.bracket.hi, err
                );
                println!(
                    "Bracket [{:.5}, {:.5}]: {}\n",
                    solve.bracket.lo, solve.bracket.hi, err
                );
            }
        }
    }
}

/// Render one root's diagnostic block.
fn format_report(report: &RootReport<f64>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Root: {:.5}\n", report.root));
    out.push_str(&format!("Accuracy: {:e}\n", report.accuracy_by_argument));
    out.push_str(&format!("Function value f(Xi): {}\n", report.f_root));
    out.push_str(&format!("Number of iterations: {}\n", report.iterations));
    out.push_str(&format!(
        "Total number of function evaluations and their derivatives: {}\n",
        report.evaluations
    ));
    out.push_str(&format!(
        "Execution time: {} microseconds\n",
        report.elapsed.as_micros()
    ));
    out.push_str(&format!(
        "Convergence parameter: {:.5}\n\n",
        report.convergence_order
    ));
    out
}

fn print_json(solves: &[BracketSolve<f64>]) -> Result<()> {
    let roots: Vec<serde_json::Value> = solves
        .iter()
        .map(|solve| {
            let bracket = solve.bracket;
            match &solve.outcome {
                Ok(report) => json!({
                    "bracket": bracket,
                    "root": report.root,
                    "f_root": report.f_root,
                    "iterations": report.iterations,
                    "accuracy_by_argument": report.accuracy_by_argument,
                    "final_step": report.final_step,
                    "convergence_order": report.convergence_order,
                    "evaluations": report.evaluations,
                    "elapsed_micros": report.elapsed.as_micros() as u64,
                }),
                Err(err) => json!({
                    "bracket": bracket,
                    "error": err.to_string(),
                }),
            }
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&json!({ "roots": roots }))?);
    Ok(())
}

fn resolve_interval(args: &ScanArgs) -> Result<(f64, f64)> {
    match (args.lower, args.upper) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, None) => {
            let values = prompt_values("Enter the interval boundaries [a, b]: ", 2)?;
            Ok((values[0], values[1]))
        }
        (Some(a), None) => Ok((a, resolve_value(None, "Enter the upper bound b: ")?)),
        (None, Some(b)) => Ok((resolve_value(None, "Enter the lower bound a: ")?, b)),
    }
}

fn resolve_value(value: Option<f64>, prompt: &str) -> Result<f64> {
    match value {
        Some(v) => Ok(v),
        None => Ok(prompt_values(prompt, 1)?[0]),
    }
}

/// Prompt once, then read whitespace-delimited floats until `count` values
/// have been collected.
fn prompt_values(prompt: &str, count: usize) -> Result<Vec<f64>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut values = Vec::with_capacity(count);
    while values.len() < count {
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(CliError::Parse("unexpected end of input".to_string()));
        }
        for token in line.split_whitespace() {
            if values.len() == count {
                break;
            }
            let parsed = token
                .parse::<f64>()
                .map_err(|_| CliError::Parse(format!("not a number: {}", token)))?;
            values.push(parsed);
        }
    }
    Ok(values)
}

fn validate_positive(name: &str, value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}
