use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub environment: String,
    pub bind_host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub cors_allowed_origins: Vec<String>,
    pub shutdown_drain_ms: u64,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            bind_host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
            cors_allowed_origins: DEFAULT_CORS_ORIGINS.iter().map(ToString::to_string).collect(),
            shutdown_drain_ms: 0,
            log_json: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}={:?}: {}", self.variable, self.value, self.reason)
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset or blank
    /// variables keep their defaults; only a malformed `PORT` is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            None => defaults.port,
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError {
                variable: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
        };
        let cors_allowed_origins = get("PMSAFETY_CORS_ORIGINS")
            .map(|raw| parse_list(&raw))
            .unwrap_or(defaults.cors_allowed_origins);

        Ok(Self {
            environment: get("ENV").unwrap_or(defaults.environment),
            bind_host: get("PMSAFETY_BIND_HOST").unwrap_or(defaults.bind_host),
            port,
            static_dir: get("PMSAFETY_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cors_allowed_origins,
            shutdown_drain_ms: get("PMSAFETY_SHUTDOWN_DRAIN_MS")
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(defaults.shutdown_drain_ms),
            log_json: get("PMSAFETY_LOG_JSON")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.log_json),
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        if self.bind_host.contains(':') {
            format!("[{}]:{}", self.bind_host, self.port)
        } else {
            format!("{}:{}", self.bind_host, self.port)
        }
    }

    #[must_use]
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.cors_allowed_origins.iter().any(|x| x == origin)
    }
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(ToString::to_string)
        .collect()
}
