//! Command-line runner: `silt <project-file>`.
//!
//! Opens the project file in read-modify mode, clears prior results, and
//! emits the full synthetic time series. Progress goes to stdout, one
//! line per tick, matching what host applications show in their solver
//! consoles.

use std::env;
use std::process::ExitCode;

use silt::prelude::*;

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        // Missing argument is an early return, not a failure exit.
        eprintln!("error: project file name not specified");
        eprintln!("usage: silt <project-file>");
        return ExitCode::SUCCESS;
    };

    println!("project file: {path}");
    match run_project(&path) {
        Ok(summary) => {
            println!(
                "finished: {} steps over a {} grid",
                summary.steps_emitted, summary.shape
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_project(path: &str) -> Result<RunSummary, RunError> {
    let mut project = ProjectFile::open_path(path).map_err(RunError::Project)?;

    let prepared = DebugRun::prepare(&mut project)?;
    let shape = prepared.shape();
    println!("grid size:");
    println!("    ni = {}", shape.ni);
    println!("    nj = {}", shape.nj);
    println!("    nk = {}", shape.nk);

    prepared.emit(&mut project, |tick, time_end| {
        println!("time: {tick} / {time_end}");
    })
}
