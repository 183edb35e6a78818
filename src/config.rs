//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines
//! constants for the upstream fact API, fallback content, CORS headers, logging
//! and default paths. `AppConfig` is the root configuration struct containing
//! all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// Upstream Fact API
// =============================================================================

/// Default upstream endpoint returning `{"fact": "...", "length": N}`
pub const DEFAULT_UPSTREAM_URL: &str = "https://catfact.ninja/fact";

/// Default deadline for a single upstream attempt, in milliseconds
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5000;

/// Fact served when the upstream call fails for any reason
pub const FALLBACK_FACT: &str =
    "Cats are amazing creatures! (Cat Facts API temporarily unavailable)";

/// User-Agent sent to the upstream
pub const UPSTREAM_USER_AGENT: &str =
    formatcp!("catfact-relay/{}", env!("CARGO_PKG_VERSION"));

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Value of `Access-Control-Allow-Origin` on every response
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Value of `Access-Control-Allow-Headers` on every response
pub const CORS_ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

/// Fact responses carry a per-request timestamp and must not be cached
pub const CACHE_CONTROL_FACT: &str = "no-store";

// =============================================================================
// Server Lifecycle
// =============================================================================

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// How long in-flight requests may drain after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Environment variable overriding the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "catfact_relay=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

const DEFAULT_USER_EMAIL: &str = "<your email>";
const DEFAULT_USER_NAME: &str = "<your full name>";
const DEFAULT_USER_STACK: &str = "<your backend stack>";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Upstream fact API settings
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Static identity embedded in every envelope
    #[serde(default)]
    pub user: UserConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Fact API URL
    #[serde(default = "UpstreamConfig::default_url")]
    pub url: String,
    /// Deadline for one attempt in milliseconds (default: 5000)
    #[serde(default = "UpstreamConfig::default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            timeout_ms: Self::default_timeout_ms(),
        }
    }
}

impl UpstreamConfig {
    fn default_url() -> String {
        DEFAULT_UPSTREAM_URL.to_string()
    }

    fn default_timeout_ms() -> u64 {
        DEFAULT_UPSTREAM_TIMEOUT_MS
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Identity fields copied verbatim into the `user` object of the envelope
#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
    #[serde(default = "UserConfig::default_email")]
    pub email: String,
    #[serde(default = "UserConfig::default_name")]
    pub name: String,
    #[serde(default = "UserConfig::default_stack")]
    pub stack: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            email: Self::default_email(),
            name: Self::default_name(),
            stack: Self::default_stack(),
        }
    }
}

impl UserConfig {
    fn default_email() -> String {
        DEFAULT_USER_EMAIL.to_string()
    }

    fn default_name() -> String {
        DEFAULT_USER_NAME.to_string()
    }

    fn default_stack() -> String {
        DEFAULT_USER_STACK.to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load from `path`, falling back to built-in defaults when the file is absent.
    ///
    /// Only used for the default path; a path the operator named explicitly must exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a raw `PORT` value, as read from the environment.
    pub fn apply_port_override(&mut self, raw: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = raw {
            self.http.port = raw.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("{} is not a valid port: {:?}", PORT_ENV_VAR, raw))
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "upstream.url must not be empty".to_string(),
            ));
        }
        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "upstream.timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
