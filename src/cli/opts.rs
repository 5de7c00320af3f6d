use clap::Parser;

/// Minimal command-line entry point
#[derive(Debug, Parser)]
#[command(
    name = "app-bootstrap",
    version,
    about = "Parse two named string arguments and emit a single log record",
    long_about = "A minimal application entry point: loads environment-driven settings (optionally from a .env file), configures file + console logging and emits one formatted record."
)]
pub struct Cli {
    /// First
    #[arg(long = "first")]
    pub first: Option<String>,

    /// Second
    #[arg(long = "second")]
    pub second: Option<String>,
}
