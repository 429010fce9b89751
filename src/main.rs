#![allow(non_snake_case)]
use RustedComputor::Utils::logger::init_logger;
use RustedComputor::Utils::plots::plot_polynomial;
use RustedComputor::Utils::session::run_session;
use RustedComputor::Utils::settings::SolverSettings;
use RustedComputor::polynomial::pipeline::solve_equation_with_precision;
use clap::Parser;
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// the equation that starts the interactive session with plotting
const VISUAL_MODE: &str = "visual";

#[derive(Parser, Debug)]
#[command(
    name = "RustedComputor",
    version,
    about = "Solves polynomial equations of degree 0, 1 and 2",
    long_about = r#"
Reduces a polynomial equation in X to the form  a0 * X^0 + a1 * X^1 + ... = 0,
prints its degree and solves it up to degree 2, complex roots included.

Examples:
  RustedComputor "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0"
  RustedComputor -v "X^2 - 4 = 0"            # also draw polynomial.png
  RustedComputor -i                           # one equation per line from stdin
  RustedComputor visual                       # interactive session with plots
"#
)]
struct Cli {
    /// equation to solve, `visual` for the interactive session with plots
    #[arg(allow_hyphen_values = true)]
    equation: Option<String>,

    /// render a PNG plot of the polynomial and its real roots
    #[arg(short, long)]
    visual: bool,

    /// read equations line by line from stdin
    #[arg(short, long)]
    interactive: bool,

    /// configuration document
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// off | error | warn | info | debug
    #[arg(short, long, value_name = "LVL")]
    loglevel: Option<String>,
}

fn load_settings(cli: &Cli) -> Result<SolverSettings, Box<dyn std::error::Error>> {
    let settings = match &cli.config {
        Some(path) => SolverSettings::from_file(path)?,
        None => SolverSettings::default(),
    };
    Ok(settings.with_loglevel(cli.loglevel.as_deref())?)
}

fn solve_one(equation: &str, settings: &SolverSettings, plot: bool) -> ExitCode {
    let report = match solve_equation_with_precision(equation, settings.precision) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("{}", report);
    if plot {
        match plot_polynomial(&report, &settings.plot) {
            Ok(Some(path)) => println!("Plot saved to {}", path.display()),
            Ok(None) => {}
            Err(e) => {
                eprintln!("Plotting failed: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    match init_logger(&settings) {
        Ok(Some(path)) => info!("logging into {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let visual_mode = cli.equation.as_deref().map(str::trim) == Some(VISUAL_MODE);
    if cli.interactive || visual_mode {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return match run_session(stdin.lock(), &mut stdout, &settings, cli.visual || visual_mode) {
            Ok(summary) => {
                info!("{} equations solved, {} failed", summary.solved, summary.failed);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    match cli.equation.as_deref() {
        Some(equation) => solve_one(equation, &settings, cli.visual),
        None => {
            eprintln!("Usage: RustedComputor [OPTIONS] <EQUATION>  (see --help)");
            ExitCode::FAILURE
        }
    }
}
