use super::user::TokenPair;
use crate::domain::shared::errors::DomainError;

/// Process-wide bearer credential. Reads are synchronous and cheap; the like
/// flow only ever calls [`CredentialStore::access_token`].
pub trait CredentialStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn store(&self, tokens: &TokenPair) -> Result<(), DomainError>;
    fn clear(&self) -> Result<(), DomainError>;
}
