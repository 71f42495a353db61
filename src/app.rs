use std::process::ExitCode;

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use crate::application::DedupConverter;
use crate::infrastructure::config::{ConfigService, DEFAULT_LOG_LEVEL};

pub fn run() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let config = match ConfigService::new().load() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(DEFAULT_LOG_LEVEL);
            error!(error = %err, "Failed to load configuration");
            eprintln!("csv-dedup: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_level);

    if let Err(err) = dotenv {
        if !err.not_found() {
            warn!(error = %err, "Failed to load .env file");
        }
    }

    let result = DedupConverter::from_config(&config)
        .and_then(|converter| converter.convert(&config.input_path, &config.output_path));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Conversion failed");
            eprintln!("csv-dedup: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// RUST_LOG wins over the configured level; logs go to stderr.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.trim().to_ascii_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
