use super::dto::{LoginForm, SignupForm};
use crate::domain::auth::credentials::CredentialStore;
use crate::domain::auth::repository::AuthApi;
use crate::domain::auth::user::{TokenPair, UserProfile};
use crate::domain::shared::errors::DomainError;
use crate::domain::shared::notice::{Action, Notice, NoticeSink};
use crate::infrastructure::security::token_claims::decode_unverified;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use validator::Validate;

pub struct AuthUseCase {
    api: Arc<dyn AuthApi>,
    credentials: Arc<dyn CredentialStore>,
    notices: Arc<dyn NoticeSink>,
}

impl AuthUseCase {
    pub fn new(
        api: Arc<dyn AuthApi>,
        credentials: Arc<dyn CredentialStore>,
        notices: Arc<dyn NoticeSink>,
    ) -> Self {
        Self {
            api,
            credentials,
            notices,
        }
    }

    pub async fn signup(&self, form: SignupForm) -> Result<(), DomainError> {
        if let Err(error) = Self::check_signup(&form) {
            self.notices.notify(Notice::SignupFailed(reason(&error)));
            return Err(error);
        }

        let request = form.into_request();
        match self.api.register(&request).await {
            Ok(()) => {
                tracing::info!(username = %request.username, "account registered");
                self.notices.notify(Notice::SignupSucceeded);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(error = %error, "registration rejected");
                self.notices.notify(Notice::SignupFailed(reason(&error)));
                Err(error)
            }
        }
    }

    fn check_signup(form: &SignupForm) -> Result<(), DomainError> {
        form.validate()?;
        if form.password != form.password_confirm {
            return Err(DomainError::ValidationError(
                "password_confirm: passwords do not match".into(),
            ));
        }
        Ok(())
    }

    pub async fn login(&self, form: LoginForm) -> Result<(), DomainError> {
        if let Err(errors) = form.validate() {
            self.notices.notify(Notice::LoginFailed);
            return Err(errors.into());
        }

        let tokens = match self.api.login(&form.into_request()).await {
            Ok(tokens) => tokens,
            Err(error) => {
                tracing::warn!(error = %error, "login rejected");
                self.notices.notify(Notice::LoginFailed);
                return Err(error);
            }
        };

        self.credentials.store(&tokens)?;
        self.notices.notify(Notice::LoginSucceeded);
        Ok(())
    }

    pub fn logout(&self) -> Result<(), DomainError> {
        self.credentials.clear()?;
        self.notices.notify(Notice::LoggedOut);
        Ok(())
    }

    pub async fn me(&self) -> Result<UserProfile, DomainError> {
        let Some(token) = self.credentials.access_token() else {
            self.notices.notify(Notice::LoginRequired(Action::ViewProfile));
            return Err(DomainError::Unauthenticated);
        };

        self.api.me(&token).await.inspect_err(|error| {
            tracing::warn!(error = %error, "profile fetch failed");
            self.notices.notify(Notice::ProfileUnavailable);
        })
    }

    /// Exchanges the stored refresh token for a new access token.
    pub async fn refresh(&self) -> Result<(), DomainError> {
        let refresh = self
            .credentials
            .refresh_token()
            .ok_or(DomainError::Unauthenticated)?;
        let access = self.api.refresh(&refresh).await?;
        self.credentials.store(&TokenPair {
            access,
            refresh: Some(refresh),
        })?;
        tracing::debug!("access token refreshed");
        Ok(())
    }

    /// Refreshes the access token when its `exp` claim has passed. Tokens
    /// without readable claims are left alone for the server to judge.
    pub async fn ensure_fresh(&self, now: DateTime<Utc>) -> Result<(), DomainError> {
        let expired = self
            .credentials
            .access_token()
            .and_then(|token| decode_unverified(&token))
            .is_some_and(|claims| claims.is_expired(now));
        if !expired {
            return Ok(());
        }

        tracing::info!("access token expired, refreshing");
        if let Err(error) = self.refresh().await {
            tracing::warn!(error = %error, "token refresh failed, clearing credentials");
            self.credentials.clear()?;
            return Err(DomainError::Unauthenticated);
        }
        Ok(())
    }

    pub fn current_user_id(&self) -> Option<i64> {
        self.credentials
            .access_token()
            .and_then(|token| decode_unverified(&token))
            .map(|claims| claims.user_id)
    }
}

fn reason(error: &DomainError) -> String {
    match error {
        DomainError::ValidationError(message) => message.clone(),
        DomainError::RequestFailed(_) => "could not reach the server".into(),
        other => other.to_string(),
    }
}
