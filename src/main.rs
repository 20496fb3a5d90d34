mod cli;
mod error;
mod launcher;

use cli::Cli;
use launcher::{ChildProcess, APP_SCRIPT, PORT, PORT_VAR, PYTHON_BIN};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    // Parse command line arguments
    let args = Cli::parse_args();
    let verbose = args.is_verbose();

    if verbose {
        eprintln!(
            "EWS-LAUNCHER: Starting {} {} with {}={}",
            PYTHON_BIN, APP_SCRIPT, PORT_VAR, PORT
        );
    }

    // Spawn the dashboard process
    let mut child = match ChildProcess::spawn(launcher::app_command()) {
        Ok(child) => child,
        Err(e) => {
            eprintln!("EWS-LAUNCHER: {}", e);
            launcher::idle_forever();
        }
    };

    if verbose {
        eprintln!("EWS-LAUNCHER: Spawned child process with PID: {}", child.id());
    }

    // Mirror the child's exit status
    match child.wait() {
        Ok(status) => {
            let code = launcher::exit_code(status);
            if verbose {
                match status.code() {
                    Some(_) => eprintln!("EWS-LAUNCHER: Child exited with code {}", code),
                    None => eprintln!("EWS-LAUNCHER: Child terminated without an exit code"),
                }
            }
            code
        }
        Err(e) => {
            eprintln!("EWS-LAUNCHER: {}", e);
            0
        }
    }
}
