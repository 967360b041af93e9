//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for labkit using clap.

pub mod commands;

use crate::config::{LabConfig, LoggingConfig};
use clap::{Parser, Subcommand};

/// Log level used when neither the flag nor the file sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// labkit - L.A.B. booking client toolkit
#[derive(Parser, Debug)]
#[command(name = "labkit")]
#[command(version, about, long_about = None)]
#[command(author = "L.A.B. Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "labkit.toml", env = "LAB_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LAB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level and logging settings for this invocation
    ///
    /// `--log-level` takes precedence over `application.log_level`. The
    /// `[logging]` file settings apply to `watch`; other commands log to the
    /// console only. A file that does not load is reported later by the
    /// command itself.
    pub fn logging_settings(&self) -> (String, LoggingConfig) {
        let config = commands::load_optional_config(&self.config).ok().flatten();
        self.logging_settings_from(config.as_ref())
    }

    fn logging_settings_from(&self, config: Option<&LabConfig>) -> (String, LoggingConfig) {
        let level = self
            .log_level
            .clone()
            .or_else(|| config.map(|config| config.application.log_level.clone()))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let logging = match (&self.command, config) {
            (Commands::Watch(_), Some(config)) => config.logging.clone(),
            _ => LoggingConfig {
                local_enabled: false,
                ..LoggingConfig::default()
            },
        };

        (level, logging)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a fiscal code, health card code or email address
    Check(commands::check::CheckArgs),

    /// Ping the booking backend once
    Ping(commands::ping::PingArgs),

    /// Ping the booking backend periodically until interrupted
    Watch(commands::watch::WatchArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Exit codes shared by every command
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// Input rejected or backend offline
    pub const FAILURE: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const FATAL: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::check::CheckTarget;

    #[test]
    fn test_cli_parse_check_fiscal_code() {
        let cli = Cli::parse_from(["labkit", "check", "fiscal-code", "RSSMRA85T10A562S"]);
        assert_eq!(cli.config, "labkit.toml");
        match cli.command {
            Commands::Check(args) => match args.target {
                CheckTarget::FiscalCode { code, strict_case } => {
                    assert_eq!(code, "RSSMRA85T10A562S");
                    assert!(!strict_case);
                }
                other => panic!("unexpected target: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_check_health_card_flags() {
        let cli = Cli::parse_from([
            "labkit",
            "check",
            "--json",
            "health-card",
            "80380001201234567890",
            "--no-leading-zero",
        ]);
        match cli.command {
            Commands::Check(args) => {
                assert!(args.json);
                assert!(matches!(
                    args.target,
                    CheckTarget::HealthCard {
                        no_leading_zero: true,
                        ..
                    }
                ));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["labkit", "--config", "custom.toml", "ping"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Ping(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["labkit", "--log-level", "debug", "ping"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    fn file_config() -> LabConfig {
        toml::from_str(
            r#"
[application]
log_level = "debug"

[api]
base_url = "http://127.0.0.1:5000/api/"

[logging]
local_enabled = true
local_path = "/var/log/labkit"
local_rotation = "hourly"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_logging_settings_follow_file() {
        let config = file_config();
        let cli = Cli::parse_from(["labkit", "watch"]);
        let (level, logging) = cli.logging_settings_from(Some(&config));
        assert_eq!(level, "debug");
        assert!(logging.local_enabled);
        assert_eq!(logging.local_path, "/var/log/labkit");
        assert_eq!(logging.local_rotation, "hourly");
    }

    #[test]
    fn test_logging_settings_flag_wins() {
        let config = file_config();
        let cli = Cli::parse_from(["labkit", "--log-level", "error", "watch"]);
        let (level, _) = cli.logging_settings_from(Some(&config));
        assert_eq!(level, "error");
    }

    #[test]
    fn test_logging_settings_one_shot_commands_stay_on_console() {
        let config = file_config();
        let cli = Cli::parse_from(["labkit", "ping"]);
        let (level, logging) = cli.logging_settings_from(Some(&config));
        assert_eq!(level, "debug");
        assert!(!logging.local_enabled);
    }

    #[test]
    fn test_logging_settings_without_file() {
        let cli = Cli::parse_from(["labkit", "--config", "/nonexistent/labkit.toml", "watch"]);
        let (level, logging) = cli.logging_settings();
        assert_eq!(level, DEFAULT_LOG_LEVEL);
        assert!(!logging.local_enabled);
    }

    #[test]
    fn test_cli_parse_watch_interval() {
        let cli = Cli::parse_from(["labkit", "watch", "--interval-seconds", "5"]);
        match cli.command {
            Commands::Watch(args) => assert_eq!(args.interval_seconds, Some(5)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["labkit", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["labkit", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
