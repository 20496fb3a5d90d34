use clap::Parser;

/// ews-launcher - process launcher for the AQUA EWS dashboard
///
/// Starts the dashboard application (`python3 app.py`) with the PORT
/// environment variable pinned, hands it the launcher's own standard
/// streams, and exits with the dashboard's exit code.
#[derive(Parser, Debug)]
#[command(
    name = "ews-launcher",
    version = "0.1.0",
    about = "Start the EWS dashboard and mirror its exit status",
    long_about = "Starts the AQUA EWS dashboard (python3 app.py) with PORT=5000 set in its\n\
                  environment. The dashboard inherits the launcher's standard streams, so\n\
                  its console I/O appears directly as the launcher's. When the dashboard\n\
                  exits, the launcher exits with the same code."
)]
pub struct Cli {
    /// Be verbose about what you're doing
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }
}
