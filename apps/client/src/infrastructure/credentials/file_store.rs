use crate::domain::auth::credentials::CredentialStore;
use crate::domain::auth::user::TokenPair;
use crate::domain::shared::errors::DomainError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Persists the token pair as JSON so it survives between CLI invocations.
/// The file is re-read on every access; nothing is cached in memory.
///
/// Writes go to an owner-only temporary file in the same directory which is
/// then renamed over the old one, so the token is never readable by others
/// and a crash never leaves a half-written file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<TokenPair> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "credential file unreadable");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(tokens) => Some(tokens),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "credential file is corrupt");
                None
            }
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn access_token(&self) -> Option<String> {
        self.load().map(|t| t.access).filter(|t| !t.is_empty())
    }

    fn refresh_token(&self) -> Option<String> {
        self.load().and_then(|t| t.refresh)
    }

    fn store(&self, tokens: &TokenPair) -> Result<(), DomainError> {
        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(storage_error)?;

        // NamedTempFile is created 0600 on unix.
        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(storage_error)?;
        restrict_permissions(file.path())?;
        serde_json::to_writer_pretty(&mut file, tokens)
            .map_err(|e| DomainError::CredentialStorage(e.to_string()))?;
        file.flush().map_err(storage_error)?;
        file.as_file().sync_all().map_err(storage_error)?;
        file.persist(&self.path)
            .map_err(|e| DomainError::CredentialStorage(e.error.to_string()))?;

        tracing::debug!(path = %self.path.display(), "credentials stored");
        Ok(())
    }

    fn clear(&self) -> Result<(), DomainError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::CredentialStorage(e.to_string())),
        }
    }
}

fn storage_error(err: std::io::Error) -> DomainError {
    DomainError::CredentialStorage(err.to_string())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), DomainError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(storage_error)
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), DomainError> {
    Ok(())
}
