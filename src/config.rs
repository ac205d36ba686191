//! Application configuration loaded from environment variables and CLI flags.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Command-line flags win over environment variables.
//!
//! ## Variables
//!
//! - `LISTEN` / `-l, --listen` - Bind address (default: `:6868`, a bare
//!   `:port` listens on all interfaces)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` / `--log-format` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` / `--behind-proxy` - Trust `X-Forwarded-Proto` when
//!   building short URLs (default: `false`)

use anyhow::Result;
use clap::Parser;
use std::env;

pub const DEFAULT_LISTEN_ADDR: &str = ":6868";

/// Command-line flags. Unset flags leave the environment value in place.
#[derive(Debug, Default, Parser)]
#[command(name = "redirector")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Listen address, e.g. `:6868` or `127.0.0.1:8080`
    #[arg(short = 'l', long)]
    pub listen: Option<String>,

    /// Log format: `text` or `json`
    #[arg(long)]
    pub log_format: Option<String>,

    /// Trust `X-Forwarded-Proto` from a reverse proxy
    #[arg(long)]
    pub behind_proxy: bool,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, the short URL scheme follows `X-Forwarded-Proto`.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
        }
    }

    /// Overlays command-line flags on top of the environment values.
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(ref listen) = args.listen {
            self.listen_addr = listen.clone();
        }
        if let Some(ref format) = args.log_format {
            self.log_format = format.clone();
        }
        if args.behind_proxy {
            self.behind_proxy = true;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no `:port` part or the port is not a number
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let Some((_, port)) = self.listen_addr.rsplit_once(':') else {
            anyhow::bail!(
                "LISTEN must be in format 'host:port' or ':port', got '{}'",
                self.listen_addr
            );
        };

        if port.parse::<u16>().is_err() {
            anyhow::bail!("LISTEN has an invalid port, got '{}'", self.listen_addr);
        }

        Ok(())
    }

    /// Address handed to the listener. A bare `:port` binds all interfaces.
    pub fn bind_addr(&self) -> String {
        if self.listen_addr.starts_with(':') {
            format!("0.0.0.0{}", self.listen_addr)
        } else {
            self.listen_addr.clone()
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
    }
}

/// Loads and validates configuration from the environment and `args`.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(args: &CliArgs) -> Result<Config> {
    let mut config = Config::from_env();
    config.apply_args(args);
    config.validate()?;
    Ok(config)
}
