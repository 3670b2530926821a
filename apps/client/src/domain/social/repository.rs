use super::comment::Comment;
use super::like::LikeTarget;
use super::post::{NewPost, Post};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

/// The toggle-like endpoints. Success is judged purely on the HTTP outcome;
/// no response body is read.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeApi: Send + Sync {
    async fn toggle_like(&self, target: LikeTarget, token: &str) -> Result<(), DomainError>;
}

#[async_trait]
pub trait SocialApi: Send + Sync {
    async fn list_posts(
        &self,
        query: Option<&str>,
        token: Option<&str>,
    ) -> Result<Vec<Post>, DomainError>;
    async fn my_posts(&self, token: &str) -> Result<Vec<Post>, DomainError>;
    async fn create_post(&self, post: &NewPost, token: &str) -> Result<Post, DomainError>;
    async fn delete_post(&self, post_id: i64, token: &str) -> Result<(), DomainError>;
    async fn list_comments(
        &self,
        post_id: i64,
        token: Option<&str>,
    ) -> Result<Vec<Comment>, DomainError>;
    async fn add_comment(
        &self,
        post_id: i64,
        body: &str,
        token: &str,
    ) -> Result<Comment, DomainError>;
    async fn delete_comment(&self, comment_id: i64, token: &str) -> Result<(), DomainError>;
}
