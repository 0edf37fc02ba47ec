//! Application runner: wires configuration, logging, and the server.

use std::path::PathBuf;

use aeai_core::Result;
use aeai_server::AppState;
use tracing_subscriber::EnvFilter;

use crate::cli::{BaseCommand, CliArgs, ConfigSubcommand};
use crate::config::SiteConfig;

// ============================================================================
// SiteApp
// ============================================================================

/// The site application: configuration plus command dispatch.
pub struct SiteApp {
    name: String,
    config: SiteConfig,
    version: String,
}

impl SiteApp {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = SiteConfig::load(args.config.as_deref())?;
        Ok(Self {
            name: "aeai-site".to_string(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(BaseCommand::Serve { port }) => self.serve(port).await,
            Some(BaseCommand::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(BaseCommand::Health) => {
                println!("{}: healthy", self.name);
                Ok(())
            }
            Some(BaseCommand::Config(config_cmd)) => match config_cmd.command {
                ConfigSubcommand::Show => {
                    println!("{}", self.config.to_toml_string()?);
                    Ok(())
                }
                ConfigSubcommand::Path => {
                    match SiteConfig::resolve_config_path(args.config.as_deref()) {
                        Some(path) => println!("{}", path.display()),
                        None => println!("(built-in defaults)"),
                    }
                    Ok(())
                }
            },
            None => {
                println!("{} {} — use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }

    /// Start the HTTP server and block until shutdown.
    async fn serve(&self, port_override: Option<u16>) -> Result<()> {
        let port = port_override.unwrap_or(self.config.server.port);
        let addr = format!("{}:{}", self.config.server.host, port);

        let state = AppState::new(self.config.cms_config())?;
        let assets_dir = PathBuf::from(&self.config.server.assets_dir);

        tracing::info!(cms = %self.config.cms.url, "starting site server");
        aeai_server::serve(state, assets_dir, &addr).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn app() -> SiteApp {
        SiteApp {
            name: "aeai-site".into(),
            config: SiteConfig::default(),
            version: "0.0.0-test".into(),
        }
    }

    #[tokio::test]
    async fn test_run_version_command() {
        let args = CliArgs::parse_from(["aeai-site", "version"]);
        assert!(app().run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_health_command() {
        let args = CliArgs::parse_from(["aeai-site", "health"]);
        assert!(app().run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_no_command() {
        let args = CliArgs::parse_from(["aeai-site"]);
        assert!(app().run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_config_show() {
        let args = CliArgs::parse_from(["aeai-site", "config", "show"]);
        assert!(app().run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_config_path() {
        let args = CliArgs::parse_from(["aeai-site", "config", "path"]);
        assert!(app().run(args).await.is_ok());
    }

    #[test]
    fn test_from_args_loads_defaults() {
        let args = CliArgs::parse_from(["aeai-site"]);
        let app = SiteApp::from_args(&args).unwrap();
        assert_eq!(app.config().server.port, 3000);
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        let app = app();
        app.init_logging(false, false);
        app.init_logging(true, false);
        app.init_logging(false, true);
    }
}
