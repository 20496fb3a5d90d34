use thiserror::Error;

/// Errors the launcher itself can run into.
///
/// The dashboard exiting nonzero is not one of them: its status is simply
/// mirrored as the launcher's own exit code. Neither variant here maps to a
/// launcher exit code either. A failed spawn leaves the launcher resident
/// (see `launcher::idle_forever`); a failed wait falls back to code 0.
#[derive(Error, Debug)]
pub enum LauncherError {
    /// The OS could not create the child process (missing interpreter,
    /// missing script, permission error).
    #[error("Failed to start python process: {0}")]
    Spawn(#[source] std::io::Error),

    /// The blocking wait on a running child failed.
    #[error("Failed to wait for python process: {0}")]
    Wait(#[source] std::io::Error),
}

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, LauncherError>;
