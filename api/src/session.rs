//! The signed-in user and the client-side store it is persisted in.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::fiat_amount::FiatAmount;
use crate::fiat_currency::FiatCurrency;
use crate::ApiError;

/// Key under which the serialized [`User`] lives.
pub const USER_STORAGE_KEY: &str = "user";

/// Balance shown for a user record that carries none.
pub const DEFAULT_DISPLAY_BALANCE: i64 = 50_000;

/// The signed-in user, as persisted by the login flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            balance: None,
        }
    }

    /// The balance to display, falling back to [`DEFAULT_DISPLAY_BALANCE`].
    ///
    /// Users loaded through [`SessionContext`] always have a representable
    /// balance. One built by hand that does not shows as zero.
    pub fn display_balance(&self, currency: FiatCurrency) -> FiatAmount {
        match self.balance {
            Some(balance) => FiatAmount::new_from_float(balance, currency).unwrap_or_else(|e| {
                warn!("balance {} not displayable: {}", balance, e);
                FiatAmount::new_from_minor(0, currency)
            }),
            None => FiatAmount::new_from_major(DEFAULT_DISPLAY_BALANCE, currency),
        }
    }

    pub(crate) fn validate(self) -> Result<Self, SessionError> {
        if self.email.trim().is_empty() {
            return Err(SessionError::Invalid("email is empty"));
        }
        if let Some(balance) = self.balance {
            if !balance.is_finite() {
                return Err(SessionError::Invalid("balance is not a finite number"));
            }
            let representable = FiatCurrency::iter()
                .all(|currency| FiatAmount::new_from_float(balance, currency).is_ok());
            if !representable {
                return Err(SessionError::Invalid("balance is out of range"));
            }
        }
        Ok(self)
    }
}

/// Why no user could be loaded. Every variant means "not signed in".
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no user session stored")]
    Missing,
    #[error("stored user session is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("stored user session is invalid: {0}")]
    Invalid(&'static str),
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// A string key/value store that survives page reloads, such as the
/// browser's `localStorage`.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove(&self, key: &str) -> Result<(), ApiError>;
}

/// Volatile store. Used in tests and when no persistent backend is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ApiError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk. Native builds only.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<HashMap<String, String>, ApiError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &HashMap<String, String>) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), ApiError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// Session handle passed into the views in place of ad hoc storage reads.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<dyn SessionStore> {
        self.store.clone()
    }

    /// Reads and validates the stored user.
    pub fn load_user(&self) -> Result<User, SessionError> {
        let raw = self
            .store
            .get(USER_STORAGE_KEY)
            .map_err(|e| SessionError::Unavailable(e.to_string()))?
            .ok_or(SessionError::Missing)?;
        let user: User = serde_json::from_str(&raw)?;
        user.validate()
    }

    /// Like [`Self::load_user`], but logs and folds every failure into `None`.
    pub fn current_user(&self) -> Option<User> {
        match self.load_user() {
            Ok(user) => Some(user),
            Err(SessionError::Missing) => None,
            Err(e) => {
                warn!("Error loading user data: {}", e);
                None
            }
        }
    }

    pub fn save_user(&self, user: &User) -> Result<(), ApiError> {
        let json = serde_json::to_string(user)?;
        self.store.set(USER_STORAGE_KEY, &json)
    }

    /// Mock sign-in: stores a user record for `email`.
    ///
    /// Signing in again with the stored email keeps its balance.
    pub fn sign_in(&self, email: &str) -> Result<User, ApiError> {
        let email = email.trim();
        if email.is_empty() {
            anyhow::bail!("email is required");
        }
        let user = match self.current_user() {
            Some(existing) if existing.email == email => existing,
            _ => User::new(email),
        };
        self.save_user(&user)?;
        info!("signed in as {}", user.email);
        Ok(user)
    }

    pub fn sign_out(&self) -> Result<(), ApiError> {
        self.store.remove(USER_STORAGE_KEY)
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SessionContext {
        SessionContext::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn missing_user_is_absent() {
        let session = context();
        assert!(matches!(session.load_user(), Err(SessionError::Missing)));
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn malformed_json_is_absent_not_a_crash() {
        let session = context();
        session.store().set(USER_STORAGE_KEY, "{not json").unwrap();
        assert!(matches!(session.load_user(), Err(SessionError::Malformed(_))));
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn blank_email_is_rejected_on_load() {
        let session = context();
        session
            .store()
            .set(USER_STORAGE_KEY, r#"{"email":"  ","balance":10}"#)
            .unwrap();
        assert!(matches!(session.load_user(), Err(SessionError::Invalid(_))));
    }

    #[test]
    fn out_of_range_balance_is_absent_not_a_crash() {
        let session = context();
        for raw in [
            r#"{"email":"a@example.com","balance":-1e300}"#,
            r#"{"email":"a@example.com","balance":1e300}"#,
        ] {
            session.store().set(USER_STORAGE_KEY, raw).unwrap();
            assert!(matches!(session.load_user(), Err(SessionError::Invalid(_))));
            assert_eq!(session.current_user(), None);
        }

        let hand_built = User {
            email: "a@example.com".into(),
            balance: Some(-1e300),
        };
        assert_eq!(
            hand_built
                .display_balance(FiatCurrency::EUR)
                .to_grouped_string_with_symbol(),
            "€0.00"
        );
    }

    #[test]
    fn loads_user_with_and_without_balance() {
        let session = context();
        session
            .store()
            .set(
                USER_STORAGE_KEY,
                r#"{"email":"a@example.com","name":"Ann","balance":1250.5}"#,
            )
            .unwrap();
        let user = session.current_user().unwrap();
        assert_eq!(user.email, "a@example.com");
        assert_eq!(user.balance, Some(1250.5));

        session
            .store()
            .set(USER_STORAGE_KEY, r#"{"email":"b@example.com"}"#)
            .unwrap();
        let user = session.current_user().unwrap();
        assert_eq!(user.balance, None);
        assert_eq!(
            user.display_balance(FiatCurrency::EUR).to_grouped_string_with_symbol(),
            "€50,000.00"
        );
    }

    #[test]
    fn sign_in_and_out() {
        let session = context();
        assert!(session.sign_in("   ").is_err());

        let user = session.sign_in(" c@example.com ").unwrap();
        assert_eq!(user.email, "c@example.com");
        assert_eq!(session.current_user(), Some(user));

        session.sign_out().unwrap();
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn sign_in_keeps_balance_for_same_email() {
        let session = context();
        session
            .save_user(&User {
                email: "d@example.com".into(),
                balance: Some(42.0),
            })
            .unwrap();
        let user = session.sign_in("d@example.com").unwrap();
        assert_eq!(user.balance, Some(42.0));
        let other = session.sign_in("e@example.com").unwrap();
        assert_eq!(other.balance, None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_between_handles() {
        let path = std::env::temp_dir().join(format!(
            "deposit-session-test-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let first = FileStore::new(&path);
        assert_eq!(first.get("user").unwrap(), None);
        first.set("user", "{\"email\":\"f@example.com\"}").unwrap();

        let second = FileStore::new(&path);
        assert_eq!(
            second.get("user").unwrap().as_deref(),
            Some("{\"email\":\"f@example.com\"}")
        );
        second.remove("user").unwrap();
        assert_eq!(first.get("user").unwrap(), None);

        let _ = std::fs::remove_file(&path);
    }
}
