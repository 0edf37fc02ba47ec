//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

/// Arguments for the `aeai-site` binary.
#[derive(Debug, Parser)]
#[command(name = "aeai-site", about = "Server for the Applied Economics AI website")]
pub struct CliArgs {
    /// Path to a configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<BaseCommand>,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum BaseCommand {
    /// Start the HTTP server.
    Serve {
        /// Override the configured port.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the version.
    Version,

    /// Print a health summary.
    Health,

    /// Inspect configuration.
    Config(ConfigCommand),
}

/// `config` subcommand wrapper.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    /// Configuration action.
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective configuration as TOML.
    Show,

    /// Print the resolved configuration file path.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_command() {
        let args = CliArgs::parse_from(["aeai-site"]);
        assert!(args.command.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_serve_with_port() {
        let args = CliArgs::parse_from(["aeai-site", "serve", "--port", "8080"]);
        match args.command {
            Some(BaseCommand::Serve { port }) => assert_eq!(port, Some(8080)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["aeai-site", "serve", "--verbose"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_config_subcommands() {
        let args = CliArgs::parse_from(["aeai-site", "config", "show"]);
        assert!(matches!(
            args.command,
            Some(BaseCommand::Config(ConfigCommand {
                command: ConfigSubcommand::Show
            }))
        ));

        let args = CliArgs::parse_from(["aeai-site", "config", "path"]);
        assert!(matches!(
            args.command,
            Some(BaseCommand::Config(ConfigCommand {
                command: ConfigSubcommand::Path
            }))
        ));
    }

    #[test]
    fn test_parse_config_flag() {
        let args = CliArgs::parse_from(["aeai-site", "--config", "/etc/aeai.toml", "serve"]);
        assert_eq!(args.config.as_deref(), Some("/etc/aeai.toml"));
    }
}
