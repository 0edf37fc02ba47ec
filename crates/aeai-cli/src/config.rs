//! Configuration for the site server.
//!
//! Provides the [`SiteConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `AEAI_CONFIG` environment variable
//! 3. XDG default: `~/.config/aeai/config.toml`
//! 4. Built-in defaults

use aeai_cms::CmsConfig;
use aeai_core::{Error, Result};
use confyg::{Confygery, env};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the site server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// HTTP server settings.
    pub server: ServerConfig,

    /// CMS connection settings.
    pub cms: CmsSection,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Directory served under `/assets`.
    pub assets_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            assets_dir: "assets".to_string(),
        }
    }
}

/// CMS connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsSection {
    /// Base URL of the CMS.
    pub url: String,

    /// Bearer token for authenticated reads.
    pub api_token: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CmsSection {
    fn default() -> Self {
        Self {
            url: "http://localhost:1337".to_string(),
            api_token: None,
            timeout_secs: 10,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl SiteConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("AEAI");
        env_opts.add_section("server");
        env_opts.add_section("cms");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. AEAI_CONFIG env var
        if let Ok(path) = std::env::var("AEAI_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("aeai").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Connection settings for the CMS client.
    pub fn cms_config(&self) -> CmsConfig {
        CmsConfig {
            base_url: self.cms.url.clone(),
            api_token: self.cms.api_token.clone(),
            timeout_secs: self.cms.timeout_secs,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// RAII guard for env var manipulation in tests.
    struct EnvGuard {
        key: String,
        prev: Option<String>,
    }

    impl EnvGuard {
        fn new(key: &str, value: &str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe { std::env::set_var(key, value) };
            Self {
                key: key.to_string(),
                prev,
            }
        }

        fn remove(key: &str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe { std::env::remove_var(key) };
            Self {
                key: key.to_string(),
                prev,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            unsafe {
                if let Some(ref val) = self.prev {
                    std::env::set_var(&self.key, val);
                } else {
                    std::env::remove_var(&self.key);
                }
            }
        }
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.assets_dir, "assets");
        assert_eq!(config.cms.url, "http://localhost:1337");
        assert!(config.cms.api_token.is_none());
        assert_eq!(config.cms.timeout_secs, 10);
    }

    #[test]
    fn test_site_config_from_toml() {
        let toml_str = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            assets_dir = "/srv/site/assets"

            [cms]
            url = "https://cms.appliedeconomics.ai"
            api_token = "tok"
            timeout_secs = 5
        "#;

        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cms.api_token.as_deref(), Some("tok"));
        assert_eq!(config.cms.timeout_secs, 5);
    }

    #[test]
    fn test_site_config_toml_round_trip() {
        let config = SiteConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("port = 3000"));

        let parsed: SiteConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.cms.url, config.cms.url);
    }

    #[test]
    fn test_site_config_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                [server]
                port = 9090
            "#,
        )
        .unwrap();

        let config = SiteConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.server.port, 9090);
        // Untouched sections keep their defaults.
        assert_eq!(config.cms.url, "http://localhost:1337");
    }

    #[test]
    fn test_site_config_load_missing_file_uses_defaults() {
        let config = SiteConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_site_config_env_overlay() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                [cms]
                url = "http://file-cms:1337"
            "#,
        )
        .unwrap();

        let _guard = EnvGuard::new("AEAI_CMS_URL", "http://env-cms:1337");
        let config = SiteConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.cms.url, "http://env-cms:1337");
    }

    #[test]
    fn test_resolve_config_path_explicit() {
        let path = SiteConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }

    #[test]
    fn test_resolve_config_path_env() {
        let _guard = EnvGuard::new("AEAI_CONFIG", "/env/config.toml");
        let path = SiteConfig::resolve_config_path(None);
        assert_eq!(path, Some(PathBuf::from("/env/config.toml")));
    }

    #[test]
    fn test_resolve_config_path_default() {
        let _guard = EnvGuard::remove("AEAI_CONFIG");
        let path = SiteConfig::resolve_config_path(None);
        assert!(path.is_some());
        let p = path.unwrap();
        assert!(p.to_str().unwrap().contains("aeai"));
        assert!(p.to_str().unwrap().ends_with("config.toml"));
    }

    #[test]
    fn test_cms_config_mapping() {
        let mut config = SiteConfig::default();
        config.cms.api_token = Some("tok".into());
        let cms = config.cms_config();
        assert_eq!(cms.base_url, "http://localhost:1337");
        assert_eq!(cms.api_token.as_deref(), Some("tok"));
        assert_eq!(cms.timeout_secs, 10);
    }
}
