use app_bootstrap::cli::{self, opts::Cli};
use app_bootstrap::constants::LOG_FILE;
use app_bootstrap::error::Result;
use app_bootstrap::logging;
use app_bootstrap::settings::Settings;
use clap::Parser;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load();

    logging::init_logging(Path::new(LOG_FILE))?;

    cli::run::handle_run(&cli, &settings)
}
