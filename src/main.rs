use clap::Parser;
use tracing::error;

use finchat::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = finchat::logging::init_logging(cli.log_level.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = finchat::cli::run(cli.command).await {
        error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
