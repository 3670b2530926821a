use crate::{
    application::{
        auth::use_case::AuthUseCase, comments::use_case::CommentSection,
        like_toggle::controller::LikeToggleController, posts::use_case::PostsUseCase,
    },
    config::Config,
    domain::{auth::credentials::CredentialStore, shared::notice::NoticeSink},
    infrastructure::{
        credentials::file_store::FileCredentialStore, http::api_client::HttpApiClient,
        notices::console_sink::ConsoleNoticeSink,
    },
};
use std::sync::Arc;

/// Everything a command needs, wired once per invocation.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub api: Arc<HttpApiClient>,
    pub credentials: Arc<dyn CredentialStore>,
    pub notices: Arc<dyn NoticeSink>,
    pub likes: Arc<LikeToggleController>,
}

impl AppContext {
    pub fn new(
        config: Config,
        credentials: Arc<dyn CredentialStore>,
        notices: Arc<dyn NoticeSink>,
    ) -> anyhow::Result<Self> {
        let api = Arc::new(HttpApiClient::new(
            &config.api_base_url,
            config.request_timeout(),
        )?);
        let likes = Arc::new(
            LikeToggleController::new(api.clone(), credentials.clone(), notices.clone())
                .with_confirm_timeout(config.like_confirm_timeout()),
        );

        Ok(Self {
            config,
            api,
            credentials,
            notices,
            likes,
        })
    }

    /// Context backed by the on-disk credential file and stderr notices.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let credentials = Arc::new(FileCredentialStore::new(config.credentials_path.clone()));
        Self::new(config, credentials, Arc::new(ConsoleNoticeSink))
    }

    pub fn auth(&self) -> AuthUseCase {
        AuthUseCase::new(
            self.api.clone(),
            self.credentials.clone(),
            self.notices.clone(),
        )
    }

    pub fn posts(&self) -> PostsUseCase {
        PostsUseCase::new(
            self.api.clone(),
            self.credentials.clone(),
            self.notices.clone(),
            self.likes.clone(),
            self.config.max_image_bytes,
        )
    }

    pub fn comment_section(&self, post_id: i64) -> CommentSection {
        CommentSection::new(
            post_id,
            self.api.clone(),
            self.credentials.clone(),
            self.notices.clone(),
            self.likes.clone(),
        )
    }
}
