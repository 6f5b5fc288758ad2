use crate::cli;
use minijinja::Environment;
use serde::{Deserialize, Serialize};
use showcase_core::{Catalog, CatalogError, SiteProfile};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config file. Error: {0}")]
    ParseError(#[from] serde_yaml::Error),
    #[error("Failed to read template in config. Error: {0}")]
    ReadError(#[from] minijinja::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON or YAML catalog document. The built-in sample catalog is used when unset.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionConfig {
    /// Seconds a browsing session may sit untouched before it is dropped.
    pub idle_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 30 * 60,
        }
    }
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
    #[serde(default)]
    pub site: Option<SiteProfile>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Renders `{{ NAME }}` placeholders from the process environment. Names
/// with no matching variable render empty.
fn render_env_placeholders(content: &str) -> Result<String, ConfigError> {
    let env = Environment::new();
    let template = env.template_from_str(content)?;

    let variables: HashMap<String, String> = template
        .undeclared_variables(false)
        .into_iter()
        .filter_map(|name| std::env::var(&name).ok().map(|value| (name, value)))
        .collect();

    Ok(template.render(variables)?)
}

impl Config {
    /// Reads the config file, or `config.yaml` when no path was given.
    ///
    /// An unreadable file falls back to defaults. That is silent only for a
    /// missing `config.yaml`; any other read failure is logged.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml_str(&content),
            Err(e) if e.kind() == ErrorKind::NotFound && config_path.is_none() => {
                tracing::debug!("No {} found, using default config", path);
                Ok(Self::default())
            }
            Err(e) => {
                tracing::warn!("Could not read config file {}: {}. Using defaults", path, e);
                Ok(Self::default())
            }
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let content = render_env_placeholders(content)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn apply_cli_overrides(mut self, args: &cli::ServeArgs) -> Self {
        if let Some(host) = &args.host {
            self.http.host = host.clone();
        }
        if let Some(port) = args.port {
            self.http.port = port;
        }
        if let Some(cors) = &args.cors_origins {
            self.http.cors_allowed_origins =
                cors.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Some(catalog) = &args.catalog {
            self.catalog.path = Some(catalog.clone());
        }
        self
    }

    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog.path {
            Some(path) => Catalog::load(path),
            None => Catalog::builtin(),
        }
    }

    pub fn site_profile(&self) -> SiteProfile {
        self.site.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load(Some("/nonexistent/showcase.yaml")).unwrap();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.sessions.idle_timeout(), Duration::from_secs(1800));
        assert_eq!(config.http.cors_allowed_origins, vec!["*"]);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.load_catalog().unwrap().len(), 4);
    }

    #[test]
    fn test_env_vars_are_substituted() {
        std::env::set_var("SHOWCASE_TEST_PORT", "9321");
        let config = Config::from_yaml_str(
            "http:\n  host: 127.0.0.1\n  port: {{ SHOWCASE_TEST_PORT }}\n  cors_allowed_origins: []\nsessions:\n  idle_timeout_secs: 60\n",
        )
        .unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9321);
        assert_eq!(config.sessions.idle_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let dir = std::env::temp_dir();
        let config = Config::load(dir.to_str()).unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert!(config.site.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let args = cli::ServeArgs {
            host: Some("localhost".to_string()),
            port: Some(3001),
            cors_origins: Some("http://a.test, http://b.test".to_string()),
            catalog: Some("projects.yaml".to_string()),
        };
        let config = Config::default().apply_cli_overrides(&args);
        assert_eq!(config.http.host, "localhost");
        assert_eq!(config.http.port, 3001);
        assert_eq!(
            config.http.cors_allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
        assert_eq!(config.catalog.path.as_deref(), Some("projects.yaml"));
    }
}
