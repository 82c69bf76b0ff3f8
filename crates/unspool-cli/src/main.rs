use std::process::ExitCode;

use unspool_cli::{config::Config, error_chain, logging::init_logging, run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::from_args();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    init_logging(&config.logging);

    tracing::info!("Running threads for {}", cli.account_name);

    match run(&cli, &config).await {
        Ok(summary) => {
            tracing::info!(
                threads = summary.threads,
                files = summary.written.len(),
                "{}",
                summary.stop_reason
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            for cause in error_chain(&err) {
                tracing::error!("{}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
