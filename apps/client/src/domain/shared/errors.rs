use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Credential storage error: {0}")]
    CredentialStorage(String),
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::ValidationError(first_validation_message(&errors))
    }
}

/// Picks one deterministic, user-facing message out of a validator report.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    fields
        .first()
        .and_then(|field| {
            let error = field_errors.get(*field)?.first()?;
            let detail = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            Some(format!("{}: {}", field, detail))
        })
        .unwrap_or_else(|| "invalid input".to_string())
}
