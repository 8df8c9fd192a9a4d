use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assistant: AssistantConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assistant: AssistantConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Remote completion provider selected at startup.
///
/// The two variants are mutually exclusive; OpenAI wins when both keys are set.
#[derive(Clone, PartialEq, Eq)]
pub enum RemoteProvider {
    OpenAi {
        api_key: String,
        model: String,
        base_url: String,
    },
    Gemini {
        api_key: String,
        model: String,
        base_url: String,
    },
}

impl RemoteProvider {
    pub fn label(&self) -> &'static str {
        match self {
            RemoteProvider::OpenAi { .. } => "openai",
            RemoteProvider::Gemini { .. } => "gemini",
        }
    }

    pub fn model(&self) -> &str {
        match self {
            RemoteProvider::OpenAi { model, .. } | RemoteProvider::Gemini { model, .. } => model,
        }
    }
}

// Keys stay out of logs.
impl fmt::Debug for RemoteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteProvider::OpenAi {
                model, base_url, ..
            }
            | RemoteProvider::Gemini {
                model, base_url, ..
            } => f
                .debug_struct(self.label())
                .field("model", model)
                .field("base_url", base_url)
                .finish_non_exhaustive(),
        }
    }
}

/// Assistant settings: the optional remote provider and generation parameters.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub provider: Option<RemoteProvider>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: None,
            temperature: 0.7,
            max_tokens: 500,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AssistantConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let provider = if let Some(api_key) = non_empty_var("OPENAI_API_KEY") {
            Some(RemoteProvider::OpenAi {
                api_key,
                model: non_empty_var("OPENAI_MODEL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                base_url: non_empty_var("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            })
        } else {
            non_empty_var("GEMINI_API_KEY").map(|api_key| RemoteProvider::Gemini {
                api_key,
                model: non_empty_var("GEMINI_MODEL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: non_empty_var("GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            })
        };

        let temperature = match non_empty_var("ASSISTANT_TEMPERATURE") {
            Some(raw) => raw
                .parse::<f32>()
                .ok()
                .filter(|value| (0.0..=2.0).contains(value))
                .ok_or(ConfigError::InvalidTemperature)?,
            None => defaults.temperature,
        };

        let max_tokens = match non_empty_var("ASSISTANT_MAX_TOKENS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidMaxTokens)?,
            None => defaults.max_tokens,
        };

        let request_timeout = match non_empty_var("ASSISTANT_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout)?,
            None => defaults.request_timeout,
        };

        Ok(Self {
            provider,
            temperature,
            max_tokens,
            request_timeout,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTemperature,
    InvalidMaxTokens,
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTemperature => {
                write!(f, "ASSISTANT_TEMPERATURE must be a number between 0 and 2")
            }
            ConfigError::InvalidMaxTokens => {
                write!(f, "ASSISTANT_MAX_TOKENS must be a positive integer")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "ASSISTANT_TIMEOUT_SECS must be a whole number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTemperature
            | ConfigError::InvalidMaxTokens
            | ConfigError::InvalidTimeout => None,
        }
    }
}
