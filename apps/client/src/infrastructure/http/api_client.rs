use super::errors::{ApiError, first_error_message};
use crate::domain::auth::repository::AuthApi;
use crate::domain::auth::user::{LoginRequest, RegisterRequest, TokenPair, UserProfile};
use crate::domain::shared::errors::DomainError;
use crate::domain::social::comment::Comment;
use crate::domain::social::like::LikeTarget;
use crate::domain::social::post::{NewPost, Post};
use crate::domain::social::repository::{LikeApi, SocialApi};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;

/// `reqwest`-backed client for the community board REST API.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct AccessToken {
    access: String,
}

impl HttpApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Request(format!("invalid base url {}: {}", base_url, e)))?;
        // Relative joins only keep the last path segment when it ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("community-board-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an image path from a post (`/media/...`) against the API origin.
    pub fn media_url(&self, path: &str) -> Option<String> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }
        self.base_url.join(path).ok().map(String::from)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Request(format!("invalid endpoint {}: {}", path, e)))
    }

    fn bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "api request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(first_error_message);
        tracing::info!(status = status.as_u16(), message = ?message, "api request rejected");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl LikeApi for HttpApiClient {
    async fn toggle_like(&self, target: LikeTarget, token: &str) -> Result<(), DomainError> {
        let path = match target {
            LikeTarget::Post(id) => format!("posts/{}/like/", id),
            LikeTarget::Comment(id) => format!("posts/comments/{}/like/", id),
        };
        let url = self.endpoint(&path)?;
        let request = Self::bearer(self.client.post(url).json(&json!({})), Some(token));
        self.execute(request).await?;
        Ok(())
    }
}

#[async_trait]
impl SocialApi for HttpApiClient {
    async fn list_posts(
        &self,
        query: Option<&str>,
        token: Option<&str>,
    ) -> Result<Vec<Post>, DomainError> {
        let mut url = self.endpoint("posts/list/")?;
        if let Some(query) = query {
            url.query_pairs_mut().append_pair("q", query);
        }
        Ok(self.fetch(Self::bearer(self.client.get(url), token)).await?)
    }

    async fn my_posts(&self, token: &str) -> Result<Vec<Post>, DomainError> {
        let url = self.endpoint("posts/myposts/")?;
        Ok(self
            .fetch(Self::bearer(self.client.get(url), Some(token)))
            .await?)
    }

    async fn create_post(&self, post: &NewPost, token: &str) -> Result<Post, DomainError> {
        let url = self.endpoint("posts/")?;
        let mut form = Form::new()
            .text("title", post.title.clone())
            .text("body", post.body.clone())
            .text("latitude", post.location.latitude.to_string())
            .text("longitude", post.location.longitude.to_string());
        if let Some(image) = &post.image {
            form = form.part(
                "image",
                Part::bytes(image.data.clone()).file_name(image.file_name.clone()),
            );
        }
        Ok(self
            .fetch(Self::bearer(self.client.post(url).multipart(form), Some(token)))
            .await?)
    }

    async fn delete_post(&self, post_id: i64, token: &str) -> Result<(), DomainError> {
        let url = self.endpoint(&format!("posts/{}/", post_id))?;
        self.execute(Self::bearer(self.client.delete(url), Some(token)))
            .await?;
        Ok(())
    }

    async fn list_comments(
        &self,
        post_id: i64,
        token: Option<&str>,
    ) -> Result<Vec<Comment>, DomainError> {
        let url = self.endpoint(&format!("posts/{}/comments/", post_id))?;
        Ok(self.fetch(Self::bearer(self.client.get(url), token)).await?)
    }

    async fn add_comment(
        &self,
        post_id: i64,
        body: &str,
        token: &str,
    ) -> Result<Comment, DomainError> {
        let url = self.endpoint(&format!("posts/{}/comments/add/", post_id))?;
        let request = self.client.post(url).json(&json!({ "body": body }));
        Ok(self.fetch(Self::bearer(request, Some(token))).await?)
    }

    async fn delete_comment(&self, comment_id: i64, token: &str) -> Result<(), DomainError> {
        let url = self.endpoint(&format!("posts/comments/{}/", comment_id))?;
        self.execute(Self::bearer(self.client.delete(url), Some(token)))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<(), DomainError> {
        let url = self.endpoint("users/register/")?;
        self.execute(self.client.post(url).json(request)).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<TokenPair, DomainError> {
        let url = self.endpoint("users/login/")?;
        Ok(self.fetch(self.client.post(url).json(request)).await?)
    }

    async fn me(&self, token: &str) -> Result<UserProfile, DomainError> {
        let url = self.endpoint("users/me/")?;
        Ok(self
            .fetch(Self::bearer(self.client.get(url), Some(token)))
            .await?)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, DomainError> {
        let url = self.endpoint("users/token/refresh/")?;
        let token: AccessToken = self
            .fetch(self.client.post(url).json(&json!({ "refresh": refresh_token })))
            .await?;
        Ok(token.access)
    }
}
