//! Botfolio configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main Botfolio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Colored terminal output
    pub color: bool,

    /// Profile storage
    pub profile: ProfileConfig,

    /// Generative backend for `ai:` questions
    pub llm: LlmConfig,

    /// Fixed links shown by the resume and certifications answers
    pub links: LinksConfig,

    /// External joke source
    pub jokes: JokesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            color: true,
            profile: ProfileConfig::default(),
            llm: LlmConfig::default(),
            links: LinksConfig::default(),
            jokes: JokesConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::candidate_paths() {
            if candidate.exists() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", candidate.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Errors are swallowed: a broken config file is reported properly by
    /// [`Config::load`] once logging exists.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = match config_path {
            Some(p) => p.clone(),
            None => Self::candidate_paths().into_iter().find(|p| p.exists())?,
        };
        let content = fs::read_to_string(path).ok()?;
        let config: Self = serde_yaml::from_str(&content).ok()?;
        config.log_level
    }

    /// Project-local `.botfolio.yml`, then `~/.config/botfolio/botfolio.yml`
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".botfolio.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("botfolio").join("botfolio.yml"));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Profile storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Path to the profile JSON file (`~/` is expanded)
    pub path: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        // XDG data directory (~/.local/share/botfolio on Linux)
        let path = dirs::data_dir()
            .map(|d| d.join("botfolio"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("data.json")
            .to_string_lossy()
            .into_owned();

        Self { path }
    }
}

impl ProfileConfig {
    pub fn expanded_path(&self) -> PathBuf {
        expand_home(&self.path)
    }
}

/// Generative backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name: "none", "anthropic" or "openai"
    pub provider: String,

    /// Model identifier; defaults per provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Environment variable containing the API key; defaults per provider
    #[serde(rename = "api-key-env", skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,

    /// API base URL; defaults per provider
    #[serde(rename = "base-url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Upper bound on tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "none".to_string(),
            model: None,
            api_key_env: None,
            base_url: None,
            max_tokens: 1024,
            timeout_ms: 60_000,
            temperature: 0.7,
        }
    }
}

/// Model, key variable and endpoint used when the config leaves them out
struct ProviderDefaults {
    model: &'static str,
    api_key_env: &'static str,
    base_url: &'static str,
}

const ANTHROPIC_DEFAULTS: ProviderDefaults = ProviderDefaults {
    model: "claude-sonnet-4-20250514",
    api_key_env: "ANTHROPIC_API_KEY",
    base_url: "https://api.anthropic.com",
};

const OPENAI_DEFAULTS: ProviderDefaults = ProviderDefaults {
    model: "gpt-4o-mini",
    api_key_env: "OPENAI_API_KEY",
    base_url: "https://api.openai.com",
};

impl LlmConfig {
    /// True unless the provider is "none" (or blank)
    pub fn is_enabled(&self) -> bool {
        let provider = self.provider.trim();
        !provider.is_empty() && !provider.eq_ignore_ascii_case("none")
    }

    fn defaults(&self) -> &'static ProviderDefaults {
        if self.provider.trim().eq_ignore_ascii_case("openai") {
            &OPENAI_DEFAULTS
        } else {
            &ANTHROPIC_DEFAULTS
        }
    }

    pub fn model(&self) -> &str {
        non_blank(&self.model).unwrap_or(self.defaults().model)
    }

    pub fn api_key_env(&self) -> &str {
        non_blank(&self.api_key_env).unwrap_or(self.defaults().api_key_env)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        non_blank(&self.base_url)
            .unwrap_or(self.defaults().base_url)
            .trim_end_matches('/')
    }

    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        let api_key_env = self.api_key_env();
        debug!(%api_key_env, "get_api_key: called");
        match std::env::var(api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(eyre::eyre!(
                "LLM API key not found. Set the {} environment variable.",
                api_key_env
            )),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Links appended to some answers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Where the full resume can be viewed or downloaded
    #[serde(rename = "resume-url")]
    pub resume_url: String,

    /// Page listing every certificate
    #[serde(rename = "certifications-url")]
    pub certifications_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            resume_url: "https://drive.google.com/drive/folders/1pX6i1j9g70Vmc3gSqYIFTHmeTpX0HlCP?usp=sharing"
                .to_string(),
            certifications_url: "https://www.linkedin.com/in/shivshakti-vashist-11042k23/details/certifications/"
                .to_string(),
        }
    }
}

/// External joke source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JokesConfig {
    /// Text file with one joke per line; built-in jokes are used when unset
    pub path: Option<String>,
}

impl JokesConfig {
    pub fn expanded_path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(expand_home)
    }
}

/// Resolve a leading `~/` against the home directory
fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
