use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::copy_marker::COPY_FEEDBACK;
use crate::fiat_currency::FiatCurrency;

/// Represents all user prefs. Read once at startup.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    currency: FiatCurrency,
    store_path: Option<PathBuf>,
    copy_feedback_ms: u64,
}

impl UserPrefs {
    /// Builds prefs from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `DEPOSIT_CURRENCY`: ISO code such as "EUR" or "usd". Defaults to EUR.
    /// - `DEPOSIT_STORE_PATH`: JSON file backing the session store on native
    ///   builds. Unset means an in-memory store.
    /// - `COPY_FEEDBACK_MS`: how long the copied marker stays, default 2000.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let currency = lookup("DEPOSIT_CURRENCY")
            .and_then(|s| FiatCurrency::from_str(s.trim()).ok())
            .unwrap_or_default();

        let store_path = lookup("DEPOSIT_STORE_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let copy_feedback_ms = lookup("COPY_FEEDBACK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(COPY_FEEDBACK.as_millis() as u64);

        Self {
            currency,
            store_path,
            copy_feedback_ms,
        }
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    pub fn store_path(&self) -> Option<&PathBuf> {
        self.store_path.as_ref()
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prefs(vars: &[(&str, &str)]) -> UserPrefs {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserPrefs::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let p = prefs(&[]);
        assert_eq!(p.currency(), FiatCurrency::EUR);
        assert_eq!(p.store_path(), None);
        assert_eq!(p.copy_feedback(), Duration::from_secs(2));
    }

    #[test]
    fn reads_values() {
        let p = prefs(&[
            ("DEPOSIT_CURRENCY", "usd"),
            ("DEPOSIT_STORE_PATH", "/tmp/deposit.json"),
            ("COPY_FEEDBACK_MS", "500"),
        ]);
        assert_eq!(p.currency(), FiatCurrency::USD);
        assert_eq!(p.store_path(), Some(&PathBuf::from("/tmp/deposit.json")));
        assert_eq!(p.copy_feedback(), Duration::from_millis(500));
    }

    #[test]
    fn invalid_values_fall_back() {
        let p = prefs(&[
            ("DEPOSIT_CURRENCY", "doubloons"),
            ("DEPOSIT_STORE_PATH", "  "),
            ("COPY_FEEDBACK_MS", "soon"),
        ]);
        assert_eq!(p.currency(), FiatCurrency::EUR);
        assert_eq!(p.store_path(), None);
        assert_eq!(p.copy_feedback(), COPY_FEEDBACK);
    }
}
