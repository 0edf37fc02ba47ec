//! AEAI CLI — configuration loading and command dispatch for the site
//! server binary.

pub mod app;
pub mod cli;
pub mod config;

pub use app::SiteApp;
pub use cli::CliArgs;
pub use config::SiteConfig;
