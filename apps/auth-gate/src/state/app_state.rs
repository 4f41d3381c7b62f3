use std::sync::Arc;

use tracing::warn;

use crate::adapters::InMemoryUserStore;
use crate::auth::{JwtTokenProvider, TokenAuthenticationInterceptor};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::ports::{TokenIssuer, UserLookup};

/// Shared resources handed to every worker.
#[derive(Clone)]
pub struct AppState {
    pub interceptor: Arc<TokenAuthenticationInterceptor>,
}

impl AppState {
    pub fn new(interceptor: Arc<TokenAuthenticationInterceptor>) -> Self {
        Self { interceptor }
    }
}

/// Wire the user store, token issuer and interceptor from configuration.
pub fn build_state(config: &AppConfig) -> Result<AppState, AppError> {
    let store = match &config.users_file {
        Some(path) => InMemoryUserStore::from_json_path(path)?,
        None => {
            warn!("AUTH_GATE_USERS_FILE not set; starting with an empty user store");
            InMemoryUserStore::new()
        }
    };
    let users: Arc<dyn UserLookup> = Arc::new(store);
    let issuer: Arc<dyn TokenIssuer> = Arc::new(JwtTokenProvider::new(config.security.clone()));

    let interceptor =
        TokenAuthenticationInterceptor::with_settings(users, issuer, config.interceptor.clone());

    Ok(AppState::new(Arc::new(interceptor)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::auth::AuthenticationToken;
    use crate::errors::AuthError;

    fn config_with(users_file: Option<std::path::PathBuf>) -> AppConfig {
        let mut config = AppConfig::from_lookup(|key| match key {
            "AUTH_GATE_JWT_SECRET" => Some("secret".to_string()),
            _ => None,
        })
        .unwrap();
        config.users_file = users_file;
        config
    }

    #[tokio::test]
    async fn test_build_state_without_users_file() {
        let state = build_state(&config_with(None)).unwrap();

        let err = state
            .interceptor
            .authenticate(&AuthenticationToken::new("email@email.com", "password"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AuthenticationFailure(_)));
        assert_eq!(state.interceptor.settings().login_path, "/login/token");
    }

    #[tokio::test]
    async fn test_build_state_loads_users_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "email": "email@email.com", "password": "password", "age": 20}}]"#
        )
        .unwrap();

        let state = build_state(&config_with(Some(file.path().to_path_buf()))).unwrap();

        let authentication = state
            .interceptor
            .authenticate(&AuthenticationToken::new("email@email.com", "password"))
            .await
            .unwrap();
        assert_eq!(authentication.principal().id, 1);

        let issued = state.interceptor.issue_token(&authentication).unwrap();
        assert!(!issued.token.is_empty());
    }

    #[test]
    fn test_build_state_missing_file_is_config_error() {
        let result = build_state(&config_with(Some("/nonexistent/users.json".into())));

        assert!(matches!(result, Err(AppError::Config { .. })));
    }
}
