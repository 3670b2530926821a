use super::user::{LoginRequest, RegisterRequest, TokenPair, UserProfile};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<(), DomainError>;
    async fn login(&self, request: &LoginRequest) -> Result<TokenPair, DomainError>;
    async fn me(&self, token: &str) -> Result<UserProfile, DomainError>;
    async fn refresh(&self, refresh_token: &str) -> Result<String, DomainError>;
}
