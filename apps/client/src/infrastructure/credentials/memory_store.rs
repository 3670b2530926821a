use crate::domain::auth::credentials::CredentialStore;
use crate::domain::auth::user::TokenPair;
use crate::domain::shared::errors::DomainError;
use std::sync::RwLock;

/// Credentials held only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self {
            tokens: RwLock::new(Some(TokenPair {
                access: token.into(),
                refresh: None,
            })),
        }
    }

    fn read(&self) -> Option<TokenPair> {
        self.tokens
            .read()
            .map(|guard| (*guard).clone())
            .unwrap_or_else(|poisoned| (*poisoned.into_inner()).clone())
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn access_token(&self) -> Option<String> {
        self.read().map(|t| t.access).filter(|t| !t.is_empty())
    }

    fn refresh_token(&self) -> Option<String> {
        self.read().and_then(|t| t.refresh)
    }

    fn store(&self, tokens: &TokenPair) -> Result<(), DomainError> {
        let mut guard = self
            .tokens
            .write()
            .map_err(|e| DomainError::CredentialStorage(e.to_string()))?;
        *guard = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), DomainError> {
        let mut guard = self
            .tokens
            .write()
            .map_err(|e| DomainError::CredentialStorage(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
