use crate::Utils::plots::plot_polynomial;
use crate::Utils::settings::SolverSettings;
use crate::polynomial::pipeline::solve_equation_with_precision;
use log::{error, info};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub solved: usize,
    pub failed: usize,
}

fn is_exit_command(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit")
}

/// Request/response loop: one equation per line, the report (or the error) is written back.
/// Ends on `quit`, `exit` or end of input. A failed equation does not end the session.
pub fn run_session<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    settings: &SolverSettings,
    plot: bool,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    write!(writer, "{}", PROMPT)?;
    writer.flush()?;
    for line in reader.lines() {
        let line = line?;
        let equation = line.trim();
        if is_exit_command(equation) {
            break;
        }
        if !equation.is_empty() {
            match solve_equation_with_precision(equation, settings.precision) {
                Ok(report) => {
                    writeln!(writer, "{}", report)?;
                    summary.solved += 1;
                    if plot {
                        match plot_polynomial(&report, &settings.plot) {
                            Ok(Some(path)) => writeln!(writer, "Plot saved to {}", path.display())?,
                            Ok(None) => {}
                            Err(e) => {
                                error!("plotting failed: {}", e);
                                writeln!(writer, "Plotting failed: {}", e)?;
                            }
                        }
                    }
                }
                Err(e) => {
                    error!("{}", e);
                    writeln!(writer, "Error: {}", e)?;
                    summary.failed += 1;
                }
            }
        }
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;
    }
    info!(
        "session ended: {} solved, {} failed",
        summary.solved, summary.failed
    );
    Ok(summary)
}
