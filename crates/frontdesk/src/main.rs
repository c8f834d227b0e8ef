//! # Frontdesk CLI
//!
//! Command-line interface for the frontdesk web backend.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod commands;
mod config;
mod telemetry;

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(version)]
#[command(about = "Web backend serving the transform API and the built frontend", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the backend server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Frontend build directory (absolute, or relative to the
        /// repository root)
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },

    /// Display version and build info
    Version,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set frontend build directory
    SetDist {
        /// Directory containing the built frontend
        dist: PathBuf,
    },

    /// Clear frontend build directory override
    ClearDist,

    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Initialize logging
    let telemetry_config = telemetry::TelemetryConfig::new("frontdesk")
        .with_log_level(&cli.log_level);

    let telemetry_config = if cli.json_logs {
        telemetry_config.with_json_logs()
    } else {
        telemetry_config
    };

    telemetry::init_logging(&telemetry_config);

    // Load configuration for default values
    let cfg = config::Config::load();

    match cli.command {
        Commands::Serve { host, port, dist } => {
            // Fall back to config values when flags are not given
            let host = host.unwrap_or_else(|| cfg.server_host.clone());
            let port = port.unwrap_or(cfg.server_port);
            let dist = dist.or(cfg.dist_dir.clone());
            commands::serve(host, port, dist).await?;
        }

        Commands::Version => {
            commands::version();
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                config::show_config();
            }
            ConfigAction::SetDist { dist } => {
                let mut cfg = config::Config::load();
                match cfg.set_dist_dir(&dist) {
                    Ok(()) => {
                        println!("Frontend build directory set to: {}", dist.display());
                        println!("Config saved to: {}", config::Config::config_path().display());
                    }
                    Err(e) => {
                        eprintln!("Failed to save config: {}", e);
                    }
                }
            }
            ConfigAction::ClearDist => {
                let mut cfg = config::Config::load();
                match cfg.clear_dist_dir() {
                    Ok(()) => {
                        println!("Frontend build directory override cleared.");
                    }
                    Err(e) => {
                        eprintln!("Failed to save config: {}", e);
                    }
                }
            }
            ConfigAction::Path => {
                println!("{}", config::Config::config_path().display());
            }
        },
    }

    Ok(())
}
