//! Shared application state: configuration, one HTTP client, and the
//! lazily built token source.

use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::google::auth::TokenSource;
use crate::google::client::GoogleContext;

pub struct AppState {
    pub config: AppConfig,
    http: reqwest::Client,
    tokens: OnceCell<Arc<TokenSource>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        AppState { config, http: reqwest::Client::new(), tokens: OnceCell::new() }
    }

    /// Client context for the remote APIs. The credentials file is checked on
    /// every call so a key dropped in after startup is picked up without a
    /// restart; until then every data endpoint fails with
    /// `CredentialsMissing`.
    pub async fn google(&self) -> Result<GoogleContext, AppError> {
        let path = &self.config.credentials_path;
        if !path.exists() {
            return Err(AppError::CredentialsMissing(path.display().to_string()));
        }
        let tokens = self
            .tokens
            .get_or_try_init(|| async {
                TokenSource::from_file(path, self.http.clone()).map(Arc::new)
            })
            .await?;
        Ok(GoogleContext::new(self.http.clone(), Arc::clone(tokens)))
    }
}
