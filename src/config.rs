use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_ACCOUNT: &str = "Ogmane007";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_LIMIT: usize = 6;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub account: String,
    pub github_token: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account", &self.account)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("limit", &self.limit)
            .finish()
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            github_token: None,
            api_base: default_api_base(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub account: Option<String>,
    pub limit: Option<usize>,
}

impl Config {
    pub fn load(overrides: CliOverrides) -> Self {
        let config_file = config_dir().join("folio").join("config.toml");
        Self::load_from(&config_file, overrides)
    }

    pub fn load_from(config_file: &Path, overrides: CliOverrides) -> Self {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(config_file));
        }

        figment = figment.merge(Env::prefixed("FOLIO_")).merge(
            Env::raw()
                .only(&["GITHUB_TOKEN"])
                .map(|_| "github_token".into()),
        );

        if let Some(account) = overrides.account {
            figment = figment.merge(Serialized::default("account", account));
        }
        if let Some(limit) = overrides.limit {
            figment = figment.merge(Serialized::default("limit", limit));
        }

        match figment.extract::<Config>() {
            Ok(config) => config.normalized(),
            Err(e) => {
                tracing::warn!(error = %e, "config parse error, using defaults");
                Config::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        self.account = self.account.trim().to_string();
        if !is_valid_login(&self.account) {
            tracing::warn!(account = %self.account, "invalid github login, using default account");
            self.account = DEFAULT_ACCOUNT.to_string();
        }
        if self.limit == 0 {
            tracing::warn!("limit must be at least 1, using default");
            self.limit = DEFAULT_LIMIT;
        }
        if self
            .github_token
            .as_deref()
            .is_some_and(|t| t.trim().is_empty())
        {
            self.github_token = None;
        }
        self.api_base = self.api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn profile_url(&self) -> String {
        profile_url(&self.account)
    }

    /// TOML dump of the effective config with the token masked.
    pub fn to_redacted_toml(&self) -> crate::error::Result<String> {
        let mut shown = self.clone();
        if shown.github_token.is_some() {
            shown.github_token = Some("[REDACTED]".to_string());
        }
        toml::to_string_pretty(&shown)
            .map_err(|e| crate::error::FolioError::Config(e.to_string()))
    }
}

/// GitHub logins: 1-39 ASCII alphanumerics or single inner hyphens.
pub fn is_valid_login(login: &str) -> bool {
    !login.is_empty()
        && login.len() <= 39
        && login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !login.starts_with('-')
        && !login.ends_with('-')
        && !login.contains("--")
}

pub fn profile_url(account: &str) -> String {
    format!("https://github.com/{account}")
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn state_dir() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".local").join("state"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
