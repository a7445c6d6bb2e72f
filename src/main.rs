use tracing::{info, warn};
use tracing_subscriber::prelude::*;

use pepbot::{bot, Config};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Setup logging
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        );

    let mut _guard = None;
    let file_layer = config.log_dir.as_ref().and_then(|log_dir| {
        std::fs::create_dir_all(log_dir).ok();
        let log_file = match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("pepbot.log"))
        {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Failed to open log file in {}: {e}", log_dir.display());
                return None;
            }
        };
        let (non_blocking, guard) = tracing_appender::non_blocking(log_file);
        _guard = Some(guard);
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                ),
        )
    });

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    info!("🚀 Starting pepbot...");
    for warning in &config.warnings {
        warn!("{warning}");
    }
    if let Some(ref log_dir) = config.log_dir {
        info!("Logging to {}", log_dir.join("pepbot.log").display());
    }

    bot::run(&config).await;
}
