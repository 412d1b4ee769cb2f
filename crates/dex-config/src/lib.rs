//! `dex.toml` loading.
//!
//! The file is looked up in the working directory and its ancestors unless a
//! path is given explicitly. With no file at all, defaults rooted at the
//! working directory apply. Command-line values ([`CliSettings`]) win over the
//! file.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 7878
//!
//! [content]
//! source_dir = "content"        # relative to dex.toml
//!
//! [site]
//! base_url = "${DEX_BASE_URL:-http://localhost:7878}"
//! title = "Component Library"
//! summary = "..."
//!
//! [feed]
//! category_order = ["Actions", "Forms"]
//! components_blurb = "Browse every component"
//! ```
//!
//! `server.host` and `site.base_url` accept `${VAR}` and `${VAR:-default}`.
//!
//! `site.base_url` has no default. Anything that writes absolute links goes
//! through [`Config::require_base_url`].

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File name searched for during discovery.
const CONFIG_FILENAME: &str = "dex.toml";

/// Content directory used when `[content] source_dir` is absent.
const DEFAULT_SOURCE_DIR: &str = "content";

/// Values taken from the command line. `None` leaves the file value alone.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// `--host`
    pub host: Option<String>,
    /// `--port`
    pub port: Option<u16>,
    /// `--source-dir`, used as given (not resolved against the config file).
    pub source_dir: Option<PathBuf>,
    /// `--base-url` / `DEX_BASE_URL`
    pub base_url: Option<String>,
}

impl CliSettings {
    fn apply_to(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.source_dir {
            config.content.source_dir.clone_from(dir);
        }
        if self.base_url.is_some() {
            config.site.base_url.clone_from(&self.base_url);
        }
    }
}

/// Loaded configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[server]`
    pub server: ServerConfig,
    /// `[content]`; `source_dir` is absolute once loaded from a file.
    pub content: ContentConfig,
    /// `[site]`
    pub site: SiteConfig,
    /// `[feed]`
    pub feed: FeedConfig,
    /// File the values came from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            content: ContentConfig::default(),
            site: SiteConfig::default(),
            feed: FeedConfig::default(),
            source: None,
        }
    }
}

/// Bind address of `dex serve`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Where authored content lives.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding `index.yaml`, `components/` and `guides/`.
    pub source_dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
        }
    }
}

/// Site identity.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute origin for feed and sitemap links.
    pub base_url: Option<String>,
    /// Feed heading.
    pub title: String,
    /// Feed preamble.
    pub summary: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            title: "Component Library".to_owned(),
            summary: "Accessible, composable UI components with copy-paste source.".to_owned(),
        }
    }
}

/// `llms.txt` settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Categories listed first, in this order. Others follow in index order.
    pub category_order: Vec<String>,
    /// Text after the component listing link.
    pub components_blurb: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        let order = [
            "Actions",
            "Forms",
            "Navigation",
            "Overlays",
            "Feedback",
            "Data Display",
            "Layout",
        ];
        Self {
            category_order: order.map(str::to_owned).to_vec(),
            components_blurb: "Browse every component".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicit config path does not exist.
    #[error("Config file {} does not exist", .0.display())]
    NotFound(PathBuf),
    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid TOML for [`Config`].
    #[error("Invalid dex.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("Invalid configuration: {0}")]
    Validation(String),
    /// `${VAR}` reference without a value.
    #[error("Cannot expand {field}: {message}")]
    EnvVar {
        /// Dotted key, e.g. `site.base_url`.
        field: String,
        /// What went wrong.
        message: String,
    },
}

impl Config {
    /// Load `config_path`, or the discovered `dex.toml`, then apply `cli`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit path, read and
    /// parse errors for a bad file, and `ConfigError::Validation` if the
    /// merged values are invalid.
    pub fn load(config_path: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => discover(),
        };

        let mut config = match &file {
            Some(path) => Self::from_file(path)?,
            None => {
                let cwd = std::env::current_dir().unwrap_or_default();
                Self::rooted_at(&cwd)
            }
        };
        tracing::debug!(file = ?config.source, "Loaded configuration");

        if let Some(cli) = cli {
            cli.apply_to(&mut config);
        }
        config.validate()?;
        Ok(config)
    }

    /// Base URL for absolute links, trailing `/` removed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `site.base_url` is unset, empty,
    /// or not an http(s) URL.
    pub fn require_base_url(&self) -> Result<&str, ConfigError> {
        let Some(url) = self.site.base_url.as_deref() else {
            return Err(ConfigError::Validation(
                "site.base_url is required to build absolute links (set it in dex.toml or pass --base-url)"
                    .to_owned(),
            ));
        };
        check_base_url(url)?;
        Ok(url.trim_end_matches('/'))
    }

    /// Check value ranges. An unset `site.base_url` passes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first bad key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(invalid("server.host cannot be empty"));
        }
        if self.server.port == 0 {
            return Err(invalid("server.port cannot be 0"));
        }
        if self.site.title.is_empty() {
            return Err(invalid("site.title cannot be empty"));
        }
        if let Some(url) = &self.site.base_url {
            check_base_url(url)?;
        }
        Ok(())
    }

    /// Defaults with the content directory under `base`.
    fn rooted_at(base: &Path) -> Self {
        let mut config = Self::default();
        config.resolve_paths(base);
        config
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&text)?;

        config.server.host = expand::expand_env(&config.server.host, "server.host")?;
        if let Some(url) = &config.site.base_url {
            config.site.base_url = Some(expand::expand_env(url, "site.base_url")?);
        }

        config.resolve_paths(path.parent().unwrap_or(Path::new(".")));
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    fn resolve_paths(&mut self, dir: &Path) {
        self.content.source_dir = dir.join(&self.content.source_dir);
    }
}

/// Nearest `dex.toml` in the working directory or an ancestor.
fn discover() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

fn check_base_url(url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(invalid("site.base_url cannot be empty"));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(invalid("site.base_url must start with http:// or https://"));
    }
    Ok(())
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Validation(message.to_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(toml: &str) -> Config {
        toml::from_str(toml).unwrap()
    }

    fn write_config(dir: &Path, toml: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, toml).unwrap();
        path
    }

    /// Unwrap a validation error and check its message mentions every needle.
    fn validation_message<T: std::fmt::Debug>(result: Result<T, ConfigError>, needles: &[&str]) {
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "got {err:?}");
        let msg = err.to_string();
        for needle in needles {
            assert!(msg.contains(needle), "'{needle}' missing from: {msg}");
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::rooted_at(Path::new("/srv/ui"));

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7878);
        assert_eq!(config.content.source_dir, PathBuf::from("/srv/ui/content"));
        assert_eq!(config.site.title, "Component Library");
        assert_eq!(config.feed.category_order.first().map(String::as_str), Some("Actions"));
        assert!(config.site.base_url.is_none());
        assert!(config.source.is_none());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("");

        assert_eq!(config.server.port, 7878);
        assert_eq!(config.content.source_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_every_section_parses() {
        let config = parse(
            r#"
[server]
host = "0.0.0.0"
port = 9000

[content]
source_dir = "docs"

[site]
base_url = "https://ui.example.com"
title = "Acme UI"
summary = "Components for Acme."

[feed]
category_order = ["Forms", "Actions"]
components_blurb = "All components"
"#,
        );

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.content.source_dir, PathBuf::from("docs"));
        assert_eq!(config.site.base_url.as_deref(), Some("https://ui.example.com"));
        assert_eq!(config.site.title, "Acme UI");
        assert_eq!(config.site.summary, "Components for Acme.");
        assert_eq!(config.feed.category_order, vec!["Forms", "Actions"]);
        assert_eq!(config.feed.components_blurb, "All components");
    }

    #[test]
    fn test_load_resolves_source_dir_against_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[site]\nbase_url = \"https://ui.example.com/\"\n\n[content]\nsource_dir = \"site\"\n",
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.source, Some(path));
        assert_eq!(config.content.source_dir, dir.path().join("site"));
        assert_eq!(config.require_base_url().unwrap(), "https://ui.example.com");
    }

    #[test]
    fn test_load_absolute_source_dir_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[content]\nsource_dir = \"/abs/content\"\n");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.content.source_dir, PathBuf::from("/abs/content"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/dex.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[server\nport = 1");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[server]\nport = 9000\n");
        let cli = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            source_dir: Some(PathBuf::from("/custom/content")),
            base_url: Some("https://override.example.com".to_owned()),
            ..CliSettings::default()
        };

        let config = Config::load(Some(&path), Some(&cli)).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.content.source_dir, PathBuf::from("/custom/content"));
        assert_eq!(
            config.require_base_url().unwrap(),
            "https://override.example.com"
        );
    }

    #[test]
    fn test_empty_cli_settings_change_nothing() {
        let mut config = Config::rooted_at(Path::new("/srv/ui"));

        CliSettings::default().apply_to(&mut config);

        assert_eq!(config.server.port, 7878);
        assert_eq!(config.content.source_dir, PathBuf::from("/srv/ui/content"));
        assert!(config.site.base_url.is_none());
    }

    #[test]
    fn test_cli_override_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let cli = CliSettings {
            port: Some(0),
            ..CliSettings::default()
        };

        validation_message(Config::load(Some(&path), Some(&cli)), &["server.port"]);
    }

    #[test]
    fn test_base_url_expanded_from_env() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TEST_DEX_SITE_HOST", "ui.example.com");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site]\nbase_url = \"https://${TEST_DEX_SITE_HOST}\"\n");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.base_url.as_deref(), Some("https://ui.example.com"));
        unsafe {
            std::env::remove_var("TEST_DEX_SITE_HOST");
        }
    }

    #[test]
    fn test_unset_env_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("TEST_DEX_MISSING_URL");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site]\nbase_url = \"${TEST_DEX_MISSING_URL}\"\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("site.base_url"));
        assert!(msg.contains("TEST_DEX_MISSING_URL"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.server.host = String::new();
        validation_message(config.validate(), &["server.host", "empty"]);

        let mut config = Config::default();
        config.site.title = String::new();
        validation_message(config.validate(), &["site.title"]);

        let mut config = Config::default();
        config.site.base_url = Some("ftp://ui.example.com".to_owned());
        validation_message(config.validate(), &["site.base_url", "http"]);
    }

    #[test]
    fn test_require_base_url() {
        let mut config = Config::default();
        validation_message(config.require_base_url(), &["site.base_url", "required"]);

        config.site.base_url = Some(String::new());
        validation_message(config.require_base_url(), &["site.base_url", "empty"]);

        config.site.base_url = Some("https://example.test//".to_owned());
        assert_eq!(config.require_base_url().unwrap(), "https://example.test");
    }
}
