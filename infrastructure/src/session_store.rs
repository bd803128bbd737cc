//! Session persistence.
//!
//! The stand-in for browser local storage: the current session survives
//! between runs as a small JSON file. [`MemorySessionStore`] is used when
//! persistence is disabled.

use poliseek_domain::AuthSession;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Storage for the single current session
pub trait SessionStore: Send + Sync {
    fn load(&self) -> io::Result<Option<AuthSession>>;
    fn save(&self, session: &AuthSession) -> io::Result<()>;
    /// Remove the stored session. Clearing an empty store succeeds.
    fn clear(&self) -> io::Result<()>;
}

/// JSON file session store.
///
/// Writes go through a temporary sibling file and a rename so a crash never
/// leaves a half-written session behind.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> io::Result<Option<AuthSession>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A corrupt file is treated as signed out.
                warn!(
                    "Discarding unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &AuthSession) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(session)?;
        let tmp = self.path.with_extension("json.tmp");
        write_private(&tmp, &json)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory session store (no persistence)
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: AuthSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> io::Result<Option<AuthSession>> {
        Ok(self.session.lock().map_err(poisoned)?.clone())
    }

    fn save(&self, session: &AuthSession) -> io::Result<()> {
        *self.session.lock().map_err(poisoned)? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.session.lock().map_err(poisoned)? = None;
        Ok(())
    }
}

/// Write a file readable by the owner only; it holds a refresh token.
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        // `mode` only applies on creation; a leftover temp file keeps its own.
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        file.write_all(contents)
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, contents)
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> io::Error {
    io::Error::other("session store lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;
    use poliseek_domain::AuthUser;

    fn session() -> AuthSession {
        AuthSession::new(
            "access",
            AuthUser {
                id: "u-1".to_string(),
                email: Some("student@neu.edu.ph".to_string()),
            },
        )
        .with_refresh_token("refresh")
    }

    #[test]
    fn test_file_store_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        assert!(store.load().unwrap().is_none());
        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(session()));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        // A stale temp file with loose permissions must not leak its mode
        std::fs::write(path.with_extension("json.tmp"), "stale").unwrap();
        std::fs::set_permissions(
            path.with_extension("json.tmp"),
            std::fs::Permissions::from_mode(0o644),
        )
        .unwrap();

        let store = FileSessionStore::new(&path);
        store.save(&session()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_file_store_corrupt_file_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&session()).unwrap();
        assert!(store.load().unwrap().is_some());
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
