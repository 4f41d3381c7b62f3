use std::time::Duration;

pub const DEFAULT_LOGIN_PATH: &str = "/login/token";
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Knobs for `TokenAuthenticationInterceptor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptorSettings {
    /// `POST` to this path runs the login flow instead of reaching a handler.
    pub login_path: String,
    /// Path prefixes that pass the gate without a bearer token.
    pub public_paths: Vec<String>,
    pub max_body_bytes: usize,
    /// `None` waits on the user store indefinitely.
    pub lookup_timeout: Option<Duration>,
}

impl InterceptorSettings {
    pub fn is_login_path(&self, path: &str) -> bool {
        path == self.login_path
    }

    /// Matches whole path segments: `/health` covers `/health/live` but not `/healthz`.
    pub fn is_public_path(&self, path: &str) -> bool {
        self.public_paths.iter().any(|prefix| {
            path == prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

impl Default for InterceptorSettings {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            public_paths: vec!["/health".to_string()],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            lookup_timeout: Some(DEFAULT_LOOKUP_TIMEOUT),
        }
    }
}
