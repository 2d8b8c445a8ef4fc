//! Application configuration from command-line flags and environment variables.
//!
//! Every flag falls back to an environment variable, which in turn falls back
//! to a default. A `.env` file is honored when `main.rs` loads it with
//! `dotenvy` before parsing.
//!
//! ```bash
//! shorty --db ./urls.db --url easy.xyz --port 8000
//! shorty -db ./urls.db -url easy.xyz -port 8000   # single-dash spellings also work
//! ```
//!
//! ## Variables
//!
//! - `DB_PATH` - Path to the database file, created if missing (default: `./urls.db`)
//! - `BASE_HOST` - Public host name used to build short URLs (default: `easy.xyz`)
//! - `PORT` - Listen port (default: `8000`)
//! - `BIND_ADDR` - Listen address (default: `0.0.0.0`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Flags that are also accepted with a single dash (`-db`, `-url`, `-port`).
const SINGLE_DASH_FLAGS: &[&str] = &["db", "url", "port"];

/// Service configuration.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shorty",
    author,
    version,
    about,
    long_about = None,
    after_help = "The flags --db, --url and --port may also be written -db, -url and -port."
)]
pub struct Config {
    /// Path to the DB (will be created, if it does not exist)
    #[arg(long = "db", env = "DB_PATH", default_value = "./urls.db")]
    pub db_path: PathBuf,

    /// Host domain name used in generated short URLs
    #[arg(long = "url", env = "BASE_HOST", default_value = "easy.xyz")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Address to bind
    #[arg(long = "bind", env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind_addr: IpAddr,

    /// Log format: `text` or `json`
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: String,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `db_path` is empty
    /// - `host` is empty or contains a scheme
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if self.db_path.as_os_str().is_empty() {
            anyhow::bail!("DB_PATH must not be empty");
        }

        if self.host.trim().is_empty() {
            anyhow::bail!("BASE_HOST must not be empty");
        }

        if self.host.contains("://") {
            anyhow::bail!(
                "BASE_HOST must be a host name without scheme, got '{}'",
                self.host
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Socket address the server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Database: {}", self.db_path.display());
        tracing::info!("  Host: {}", self.host);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses flags (with environment fallbacks) and validates the result.
///
/// # Errors
///
/// Returns an error if validation fails. Flag parse errors exit the process
/// with clap's usage message.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load() -> Result<Config> {
    let config = Config::parse_from(normalize_args(std::env::args_os()));
    config.validate()?;
    Ok(config)
}

/// Rewrites `-db`, `-url` and `-port` (optionally with `=value`) to their
/// double-dash forms. Other arguments pass through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            long_form(&arg).unwrap_or(arg)
        })
        .collect()
}

fn long_form(arg: &OsStr) -> Option<OsString> {
    let text = arg.to_str()?;
    let flag = text.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);

    SINGLE_DASH_FLAGS
        .contains(&name)
        .then(|| OsString::from(format!("-{text}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("shorty").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--db",
            "/tmp/other.db",
            "--url",
            "s.example.com",
            "--port",
            "9000",
            "--bind",
            "127.0.0.1",
            "--log-format",
            "json",
        ]);

        assert_eq!(config.db_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.host, "s.example.com");
        assert_eq!(config.port, 9000);
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.log_format, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_numeric_port() {
        let result = Config::try_parse_from(["shorty", "--port", "eighty"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = parse(&[
            "--db",
            "./urls.db",
            "--url",
            "easy.xyz",
            "--port",
            "8000",
            "--log-format",
            "text",
        ]);
        assert!(config.validate().is_ok());

        config.port = 0;
        assert!(config.validate().is_err());
        config.port = 8000;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "text".to_string();

        config.host = "https://easy.xyz".to_string();
        assert!(config.validate().is_err());
        config.host = String::new();
        assert!(config.validate().is_err());
        config.host = "easy.xyz".to_string();

        config.db_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_single_dash_flags() {
        let args = normalize_args([
            "shorty", "-db", "/tmp/x.db", "-url=s.example.com", "-port", "9000",
        ]);
        let config = Config::try_parse_from(args).unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(config.host, "s.example.com");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_normalize_args_leaves_other_arguments() {
        let args = normalize_args(["shorty", "--db", "-dbvalue", "-h", "--port"]);

        let expected: Vec<OsString> = ["shorty", "--db", "-dbvalue", "-h", "--port"]
            .into_iter()
            .map(OsString::from)
            .collect();
        assert_eq!(args, expected);
    }
}
