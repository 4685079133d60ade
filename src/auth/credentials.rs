//! Credential storage and management
//!
//! Handles the flat `username:password_hash` file backing the user database.

use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// In-memory copy of the store as of the last `load()`
pub type Credentials = HashMap<String, String>;

/// One line of the credential file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

impl UserRecord {
    /// Parses `username:hash`, splitting on the first `:` and trimming both halves.
    ///
    /// Returns `None` when there is no separator or either half is blank.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (user, hash) = line.split_once(':')?;
        let (user, hash) = (user.trim(), hash.trim());
        if user.is_empty() || hash.is_empty() {
            return None;
        }
        Some(Self {
            username: user.to_string(),
            password_hash: hash.to_string(),
        })
    }

    pub fn to_line(&self) -> String {
        format!("{}:{}", self.username, self.password_hash)
    }
}

/// File-backed credential store
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file into a snapshot.
    ///
    /// A missing or unreadable file yields an empty snapshot. Malformed lines
    /// are skipped and later duplicates win.
    pub fn load(&self) -> Credentials {
        let mut users = Credentials::new();

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Credential file {} not found", self.path.display());
                return users;
            }
            Err(e) => {
                warn!(
                    "Failed to read credential file {}: {}",
                    self.path.display(),
                    e
                );
                return users;
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        for (lineno, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match UserRecord::parse_line(line) {
                Some(record) => {
                    users.insert(record.username, record.password_hash);
                }
                None => debug!(
                    "Skipping malformed line {} in {}",
                    lineno + 1,
                    self.path.display()
                ),
            }
        }

        debug!(
            "Loaded {} users from {}",
            users.len(),
            self.path.display()
        );
        users
    }

    /// Appends one `username:password_hash` line. Uniqueness is the caller's job.
    pub fn append(&self, username: &str, password_hash: &str) -> Result<(), StorageError> {
        let record = UserRecord {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };

        let write_failed = |source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_failed)?;
        writeln!(file, "{}", record.to_line()).map_err(write_failed)?;

        info!("Stored user {} in {}", username, self.path.display());
        Ok(())
    }

    /// Membership test against a previously loaded snapshot
    pub fn exists(users: &Credentials, username: &str) -> bool {
        users.contains_key(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "simple-auth-credentials-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cleanup_test_dir(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            UserRecord::parse_line("  alice : 123 "),
            Some(UserRecord {
                username: "alice".into(),
                password_hash: "123".into(),
            })
        );
        assert_eq!(UserRecord::parse_line("no separator"), None);
        assert_eq!(UserRecord::parse_line(":123"), None);
        assert_eq!(UserRecord::parse_line("alice:   "), None);
    }

    #[test]
    fn test_parse_line_splits_on_first_colon() {
        let record = UserRecord::parse_line("carol:12:34").unwrap();
        assert_eq!(record.username, "carol");
        assert_eq!(record.password_hash, "12:34");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = setup_test_dir("missing");
        let store = CredentialStore::new(dir.join("users.txt"));
        assert!(store.load().is_empty());
        assert!(!store.path().exists());
        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let dir = setup_test_dir("malformed");
        let path = dir.join("users.txt");
        fs::write(
            &path,
            "alice:111\ngarbage\n:222\nbob:\n\n  carol  :  333  \r\n",
        )
        .unwrap();

        let users = CredentialStore::new(&path).load();
        assert_eq!(users.len(), 2);
        assert_eq!(users.get("alice").map(String::as_str), Some("111"));
        assert_eq!(users.get("carol").map(String::as_str), Some("333"));
        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_load_last_duplicate_wins() {
        let dir = setup_test_dir("duplicate");
        let path = dir.join("users.txt");
        fs::write(&path, "dave:1\ndave:2\n").unwrap();

        let users = CredentialStore::new(&path).load();
        assert_eq!(users.get("dave").map(String::as_str), Some("2"));
        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_append_then_load() {
        let dir = setup_test_dir("append");
        let store = CredentialStore::new(dir.join("users.txt"));

        store.append("alice", "111").unwrap();
        store.append("bob", "222").unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "alice:111\nbob:222\n");

        let first = store.load();
        let second = store.load();
        assert_eq!(first, second);
        assert!(CredentialStore::exists(&first, "alice"));
        assert!(CredentialStore::exists(&first, "bob"));
        assert!(!CredentialStore::exists(&first, "Alice"));
        cleanup_test_dir(&dir);
    }

    #[test]
    fn test_append_failure() {
        let dir = setup_test_dir("unwritable");
        // A directory cannot be opened for appending.
        let store = CredentialStore::new(&dir);
        let err = store.append("alice", "111").unwrap_err();
        assert!(matches!(err, StorageError::WriteFailed { .. }));
        cleanup_test_dir(&dir);
    }
}
