//! File-backed token store.
//!
//! Holds the same single token string the browser keeps in local storage.
//! The file contains the bare token; surrounding whitespace is ignored and
//! an empty file counts as logged out.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use catalog::TokenStore;

pub const DEFAULT_TOKEN_FILE: &str = "~/.bookshelf/token";

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Expand `~` and environment variables in `raw` before opening.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error when a referenced variable is unset.
    pub fn from_config(raw: &str) -> io::Result<Self> {
        let expanded = shellexpand::full(raw)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("token file {raw:?}: {e}")))?;
        Ok(Self::new(expanded.as_ref()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    type Error = io::Error;

    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Some(raw.trim().to_owned()).filter(|t| !t.is_empty()),
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %e, "token file unreadable");
                }
                None
            }
        }
    }

    fn store(&self, token: &str) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;
        // `mode` only applies on creation; tighten a file left behind by an older run.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(token.as_bytes())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
