//! Configuration management for the frontdesk CLI.
//!
//! Configuration is loaded from (in order of precedence):
//! 1. Command-line arguments
//! 2. Environment variables (FRONTDESK_*)
//! 3. Config file (~/.config/frontdesk/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Frontend build directory to serve when --dist is not specified.
    #[serde(default)]
    pub dist_dir: Option<PathBuf>,

    /// Server host.
    #[serde(default = "default_host")]
    pub server_host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dist_dir: None,
            server_host: default_host(),
            server_port: default_port(),
        }
    }
}

impl Config {
    /// Loads configuration from all sources.
    ///
    /// Reports warnings for configuration errors but falls back to defaults.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("FRONTDESK_"));

        match figment.extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                // Report the error clearly to the user
                eprintln!("\x1b[33mWarning:\x1b[0m Configuration error, using defaults");
                eprintln!("  Config file: {}", config_path.display());
                eprintln!("  Error: {}", e);
                eprintln!();
                eprintln!("  To fix, edit or delete the config file:");
                eprintln!("    rm {}", config_path.display());
                eprintln!();
                Config::default()
            }
        }
    }

    /// Returns the path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("frontdesk")
            .join("config.toml")
    }

    /// Returns the path to the config directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("frontdesk")
    }

    /// Saves the current configuration to the config file.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_dir = Self::config_dir();
        std::fs::create_dir_all(&config_dir)?;

        let config_path = Self::config_path();
        let toml_str = toml::to_string_pretty(self).map_err(std::io::Error::other)?;

        std::fs::write(&config_path, toml_str)?;
        Ok(())
    }

    /// Sets the frontend build directory and saves.
    pub fn set_dist_dir(&mut self, dist: &Path) -> Result<(), std::io::Error> {
        self.dist_dir = Some(dist.to_path_buf());
        self.save()
    }

    /// Clears the frontend build directory override and saves.
    pub fn clear_dist_dir(&mut self) -> Result<(), std::io::Error> {
        self.dist_dir = None;
        self.save()
    }
}

/// Prints the current configuration and its sources.
pub fn show_config() {
    let config = Config::load();
    let config_path = Config::config_path();

    println!("Frontdesk Configuration");
    println!("=======================\n");

    println!("Config file: {}", config_path.display());
    if config_path.exists() {
        println!("Status: Found\n");
    } else {
        println!("Status: Not found (using defaults)\n");
    }

    println!("Current settings:");
    println!(
        "  dist_dir: {}",
        config
            .dist_dir
            .as_deref()
            .map_or_else(|| "(not set)".to_string(), |p| p.display().to_string())
    );
    println!("  server_host: {}", config.server_host);
    println!("  server_port: {}", config.server_port);

    println!("\nEnvironment variables:");
    println!("  FRONTDESK_DIST_DIR");
    println!("  FRONTDESK_SERVER_HOST");
    println!("  FRONTDESK_SERVER_PORT");
}
