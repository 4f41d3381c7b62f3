use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::interceptor::InterceptorSettings;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub interceptor: InterceptorSettings,
    /// JSON array of members used to seed the in-memory user store
    pub users_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let jwt_secret = get("AUTH_GATE_JWT_SECRET")
            .ok_or_else(|| AppError::config("AUTH_GATE_JWT_SECRET must be set"))?;
        let token_ttl = parse_or("AUTH_GATE_TOKEN_TTL_SECS", get("AUTH_GATE_TOKEN_TTL_SECS"), 15 * 60)?;
        if token_ttl == 0 {
            return Err(AppError::config("AUTH_GATE_TOKEN_TTL_SECS must be positive"));
        }

        let defaults = InterceptorSettings::default();
        let login_path = get("AUTH_GATE_LOGIN_PATH").unwrap_or(defaults.login_path);
        if !login_path.starts_with('/') {
            return Err(AppError::config(format!(
                "AUTH_GATE_LOGIN_PATH must start with '/' (got {login_path})"
            )));
        }
        let public_paths = match get("AUTH_GATE_PUBLIC_PATHS") {
            Some(raw) => raw
                .split(',')
                .map(|p| p.trim().trim_end_matches('/').to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            None => defaults.public_paths,
        };
        let max_body_bytes = parse_or(
            "AUTH_GATE_MAX_BODY_BYTES",
            get("AUTH_GATE_MAX_BODY_BYTES"),
            defaults.max_body_bytes,
        )?;
        let lookup_timeout_ms: u64 = parse_or(
            "AUTH_GATE_LOOKUP_TIMEOUT_MS",
            get("AUTH_GATE_LOOKUP_TIMEOUT_MS"),
            2_000,
        )?;

        Ok(Self {
            server: ServerConfig {
                host: get("AUTH_GATE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: parse_or("AUTH_GATE_PORT", get("AUTH_GATE_PORT"), DEFAULT_PORT)?,
            },
            security: SecurityConfig::new(jwt_secret.into_bytes())
                .with_token_ttl(Duration::from_secs(token_ttl)),
            interceptor: InterceptorSettings {
                login_path,
                public_paths,
                max_body_bytes,
                lookup_timeout: (lookup_timeout_ms > 0)
                    .then(|| Duration::from_millis(lookup_timeout_ms)),
            },
            users_file: get("AUTH_GATE_USERS_FILE").map(PathBuf::from),
        })
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, AppError> {
    match raw {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{key} has an invalid value: {value}"))),
        None => Ok(default),
    }
}
