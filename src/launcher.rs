//! Spawning and waiting on the dashboard process.

use crate::error::{LauncherError, Result};
use std::process::{Child, Command, ExitStatus, Stdio};

/// Interpreter the dashboard runs under.
pub const PYTHON_BIN: &str = "python3";
/// Entry script of the dashboard application.
pub const APP_SCRIPT: &str = "app.py";
/// Environment variable the dashboard reads its listen port from.
pub const PORT_VAR: &str = "PORT";
/// Port the dashboard is expected to bind.
pub const PORT: &str = "5000";

/// Build the fixed dashboard invocation.
///
/// The child sees the launcher's full environment with `PORT` overridden,
/// and all three standard streams are handed through untouched.
pub fn app_command() -> Command {
    let mut command = Command::new(PYTHON_BIN);
    command
        .arg(APP_SCRIPT)
        .env(PORT_VAR, PORT)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

/// Handle to the spawned dashboard process.
///
/// At most one of these exists per launcher run; it is neither reused nor
/// shared.
pub struct ChildProcess {
    child: Child,
}

impl ChildProcess {
    /// Spawn the child process for the given command.
    ///
    /// # Arguments
    /// * `command` - Fully configured invocation, normally `app_command()`
    ///
    /// # Returns
    /// A ChildProcess handle on success
    pub fn spawn(mut command: Command) -> Result<Self> {
        let child = command.spawn().map_err(LauncherError::Spawn)?;
        Ok(ChildProcess { child })
    }

    /// OS process id of the child.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Wait for the child process to exit (blocking).
    pub fn wait(&mut self) -> Result<ExitStatus> {
        self.child.wait().map_err(LauncherError::Wait)
    }
}

/// Map a child exit status to the launcher's own exit code.
///
/// A status carrying no code (the child was terminated by a signal) maps
/// to 0.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(0)
}

/// Park the launcher after a failed spawn.
///
/// A failed start produces no exit event, so the launcher stays resident
/// until terminated from outside.
pub fn idle_forever() -> ! {
    loop {
        std::thread::park();
    }
}
