use super::dto::PostForm;
use crate::application::like_toggle::controller::LikeToggleController;
use crate::application::like_toggle::dto::ToggleOutcome;
use crate::domain::auth::credentials::CredentialStore;
use crate::domain::shared::errors::DomainError;
use crate::domain::shared::notice::{Action, Notice, NoticeSink};
use crate::domain::social::like::LikeTarget;
use crate::domain::social::post::{ImageUpload, NewPost, Post};
use crate::domain::social::repository::SocialApi;
use crate::domain::social::value_objects::Coordinates;
use std::path::Path;
use std::sync::Arc;
use validator::Validate;

pub struct PostsUseCase {
    api: Arc<dyn SocialApi>,
    credentials: Arc<dyn CredentialStore>,
    notices: Arc<dyn NoticeSink>,
    likes: Arc<LikeToggleController>,
    max_image_bytes: u64,
}

impl PostsUseCase {
    pub fn new(
        api: Arc<dyn SocialApi>,
        credentials: Arc<dyn CredentialStore>,
        notices: Arc<dyn NoticeSink>,
        likes: Arc<LikeToggleController>,
        max_image_bytes: u64,
    ) -> Self {
        Self {
            api,
            credentials,
            notices,
            likes,
            max_image_bytes,
        }
    }

    /// Lists posts, newest first, optionally filtered by a search query. The
    /// credential is attached when present so `is_liked` reflects the viewer.
    pub async fn list(&self, query: Option<&str>) -> Result<Vec<Post>, DomainError> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let token = self.credentials.access_token();

        let posts = self
            .api
            .list_posts(query, token.as_deref())
            .await
            .inspect_err(|error| {
                tracing::warn!(error = %error, "post list failed");
                self.notices.notify(Notice::PostsUnavailable);
            })?;

        tracing::debug!(count = posts.len(), query = ?query, "posts loaded");
        self.likes.seed_all(&posts);
        Ok(posts)
    }

    pub async fn my_posts(&self) -> Result<Vec<Post>, DomainError> {
        let token = self.require_token(Action::Post)?;
        let posts = self.api.my_posts(&token).await.inspect_err(|error| {
            tracing::warn!(error = %error, "own post list failed");
            self.notices.notify(Notice::PostsUnavailable);
        })?;
        self.likes.seed_all(&posts);
        Ok(posts)
    }

    pub async fn create(&self, form: PostForm) -> Result<Post, DomainError> {
        let post = match self.prepare(form).await {
            Ok(post) => post,
            Err(error) => {
                if let DomainError::ValidationError(message) = &error {
                    self.notices.notify(Notice::PostFailed(message.clone()));
                }
                return Err(error);
            }
        };
        let token = self.require_token(Action::Post)?;

        match self.api.create_post(&post, &token).await {
            Ok(created) => {
                tracing::info!(post_id = created.id, city = %created.city, "post created");
                self.likes.seed_all([&created]);
                Ok(created)
            }
            Err(error) => {
                tracing::warn!(error = %error, "post creation failed");
                let reason = match &error {
                    DomainError::ValidationError(message) => message.clone(),
                    _ => "please try again".to_string(),
                };
                self.notices.notify(Notice::PostFailed(reason));
                Err(error)
            }
        }
    }

    pub async fn delete(&self, post_id: i64) -> Result<(), DomainError> {
        let token = self.require_token(Action::DeletePost)?;
        self.api
            .delete_post(post_id, &token)
            .await
            .inspect_err(|error| {
                tracing::warn!(post_id, error = %error, "post deletion failed");
                self.notices.notify(Notice::PostDeleteFailed);
            })?;
        self.likes.forget(LikeTarget::Post(post_id));
        Ok(())
    }

    pub async fn toggle_like(&self, post_id: i64) -> ToggleOutcome {
        self.likes.toggle(LikeTarget::Post(post_id)).await
    }

    pub fn likes(&self) -> &LikeToggleController {
        &self.likes
    }

    async fn prepare(&self, form: PostForm) -> Result<NewPost, DomainError> {
        form.validate()?;
        let (Some(latitude), Some(longitude)) = (form.latitude, form.longitude) else {
            return Err(DomainError::ValidationError(
                "location: pick the spot on the map".into(),
            ));
        };
        let location = Coordinates::new(latitude, longitude)?;
        let image = match &form.image {
            Some(path) => Some(self.load_image(path).await?),
            None => None,
        };

        Ok(NewPost {
            title: form.title.trim().to_string(),
            body: form.body.trim().to_string(),
            location,
            image,
        })
    }

    async fn load_image(&self, path: &Path) -> Result<ImageUpload, DomainError> {
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            DomainError::ValidationError(format!("image: cannot read {}: {}", path.display(), e))
        })?;
        if metadata.len() > self.max_image_bytes {
            return Err(DomainError::ValidationError(format!(
                "image: must be {} MB or smaller",
                self.max_image_bytes / (1024 * 1024)
            )));
        }

        let data = tokio::fs::read(path).await.map_err(|e| {
            DomainError::ValidationError(format!("image: cannot read {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        Ok(ImageUpload { file_name, data })
    }

    fn require_token(&self, action: Action) -> Result<String, DomainError> {
        self.credentials.access_token().ok_or_else(|| {
            self.notices.notify(Notice::LoginRequired(action));
            DomainError::Unauthenticated
        })
    }
}
