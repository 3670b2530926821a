use crate::application::like_toggle::controller::LikeToggleController;
use crate::application::like_toggle::dto::ToggleOutcome;
use crate::domain::auth::credentials::CredentialStore;
use crate::domain::shared::errors::DomainError;
use crate::domain::shared::notice::{Action, Notice, NoticeSink};
use crate::domain::social::comment::Comment;
use crate::domain::social::like::{LikeState, LikeTarget};
use crate::domain::social::repository::SocialApi;
use crate::domain::social::value_objects::CommentBody;
use crate::infrastructure::security::token_claims::decode_unverified;
use std::sync::Arc;

/// The comment thread under one post. Holds the last fetched list; comment
/// likes are tracked by the shared [`LikeToggleController`].
pub struct CommentSection {
    post_id: i64,
    api: Arc<dyn SocialApi>,
    credentials: Arc<dyn CredentialStore>,
    notices: Arc<dyn NoticeSink>,
    likes: Arc<LikeToggleController>,
    comments: Vec<Comment>,
}

impl CommentSection {
    pub fn new(
        post_id: i64,
        api: Arc<dyn SocialApi>,
        credentials: Arc<dyn CredentialStore>,
        notices: Arc<dyn NoticeSink>,
        likes: Arc<LikeToggleController>,
    ) -> Self {
        Self {
            post_id,
            api,
            credentials,
            notices,
            likes,
            comments: Vec::new(),
        }
    }

    pub fn post_id(&self) -> i64 {
        self.post_id
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Refetches the thread. On failure the previous list is kept.
    pub async fn load(&mut self) -> Result<&[Comment], DomainError> {
        let token = self.credentials.access_token();
        match self.api.list_comments(self.post_id, token.as_deref()).await {
            Ok(comments) => {
                tracing::debug!(post_id = self.post_id, count = comments.len(), "comments loaded");
                self.likes.seed_all(&comments);
                self.comments = comments;
                Ok(&self.comments)
            }
            Err(error) => {
                tracing::warn!(post_id = self.post_id, error = %error, "comment fetch failed");
                self.notices.notify(Notice::CommentsUnavailable);
                Err(error)
            }
        }
    }

    /// Posts a comment and reloads the thread. Blank input is rejected
    /// silently, before the credential is even looked at.
    pub async fn submit(&mut self, body: &str) -> Result<(), DomainError> {
        let body = CommentBody::new(body)?;
        let token = self.require_token(Action::Comment)?;

        if let Err(error) = self.api.add_comment(self.post_id, &body.value, &token).await {
            tracing::warn!(post_id = self.post_id, error = %error, "comment submission failed");
            self.notices.notify(Notice::CommentFailed);
            return Err(error);
        }

        tracing::info!(post_id = self.post_id, "comment posted");
        self.load().await?;
        Ok(())
    }

    pub async fn delete(&mut self, comment_id: i64) -> Result<(), DomainError> {
        let token = self.require_token(Action::DeleteComment)?;

        if let Err(error) = self.api.delete_comment(comment_id, &token).await {
            tracing::warn!(comment_id, error = %error, "comment deletion failed");
            self.notices.notify(Notice::CommentDeleteFailed);
            return Err(error);
        }

        self.comments.retain(|comment| comment.id != comment_id);
        self.likes.forget(LikeTarget::Comment(comment_id));
        Ok(())
    }

    pub async fn toggle_like(&self, comment_id: i64) -> ToggleOutcome {
        self.likes.toggle(LikeTarget::Comment(comment_id)).await
    }

    /// Current like state as shown to the viewer, including any optimistic
    /// update still in flight.
    pub fn like_state(&self, comment_id: i64) -> Option<LikeState> {
        self.likes.state(LikeTarget::Comment(comment_id))
    }

    pub fn current_user_id(&self) -> Option<i64> {
        self.credentials
            .access_token()
            .and_then(|token| decode_unverified(&token))
            .map(|claims| claims.user_id)
    }

    /// Only the author may delete a comment. Authors reported by name alone
    /// can never be matched, so their comments are not deletable here.
    pub fn can_delete(&self, comment: &Comment) -> bool {
        match (self.current_user_id(), comment.user.id()) {
            (Some(viewer), Some(author)) => viewer == author,
            _ => false,
        }
    }

    fn require_token(&self, action: Action) -> Result<String, DomainError> {
        self.credentials.access_token().ok_or_else(|| {
            self.notices.notify(Notice::LoginRequired(action));
            DomainError::Unauthenticated
        })
    }
}
