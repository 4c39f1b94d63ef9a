//! Recording of deposit requests.
//!
//! The deposit page only depends on the [`DepositRecorder`] trait. The
//! [`LocalDepositRecorder`] keeps the bookkeeping in the client-side session
//! store; a real backend would implement the same trait.

use std::fmt;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use num_traits::CheckedAdd;
use serde::Deserialize;
use serde::Serialize;

use crate::fiat_amount::FiatAmount;
use crate::session::SessionContext;
use crate::session::SessionStore;
use crate::session::DEFAULT_DISPLAY_BALANCE;
use crate::ApiError;

/// Key under which recorded deposits are kept.
pub const DEPOSITS_STORAGE_KEY: &str = "deposits";

/// Opaque identifier handed back by a recorder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Records a deposit and returns its transaction id. May fail for any reason
/// the collaborator chooses; callers must not assume idempotency.
pub trait DepositRecorder {
    fn process_deposit(
        &self,
        email: &str,
        amount: FiatAmount,
        method: &str,
    ) -> Result<TransactionId, ApiError>;
}

/// Local records never settle, so every one stays pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::EnumIs)]
pub enum DepositStatus {
    Pending,
}

impl DepositStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
        }
    }
}

/// One recorded deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRecord {
    pub id: TransactionId,
    pub email: String,
    pub amount: FiatAmount,
    pub method: String,
    pub status: DepositStatus,
    pub created_at: DateTime<Utc>,
}

/// Recorder that keeps deposits and balances in a [`SessionStore`].
#[derive(Clone)]
pub struct LocalDepositRecorder {
    session: SessionContext,
}

impl LocalDepositRecorder {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            session: SessionContext::new(store),
        }
    }

    fn load_records(&self) -> Result<Vec<DepositRecord>, ApiError> {
        match self.session.store().get(DEPOSITS_STORAGE_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_records(&self, records: &[DepositRecord]) -> Result<(), ApiError> {
        let json = serde_json::to_string(records)?;
        self.session.store().set(DEPOSITS_STORAGE_KEY, &json)
    }

    /// Deposits recorded for `email`, newest first.
    pub fn history(&self, email: &str) -> Result<Vec<DepositRecord>, ApiError> {
        let mut records: Vec<_> = self
            .load_records()?
            .into_iter()
            .filter(|r| r.email == email)
            .collect();
        // stored oldest first; reverse so equal timestamps stay newest first
        records.reverse();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    fn credit_balance(&self, email: &str, amount: FiatAmount) -> Result<(), ApiError> {
        let Some(mut user) = self.session.current_user() else {
            return Ok(());
        };
        if user.email != email {
            return Ok(());
        }
        let current = user.balance.unwrap_or(DEFAULT_DISPLAY_BALANCE as f64);
        user.balance = Some(current + amount.as_major_f64());
        let user = user.validate()?;
        self.session.save_user(&user)
    }
}

/// Builds the id for the `sequence`-th record created at `at`.
pub fn transaction_id_for(at: DateTime<Utc>, sequence: usize) -> TransactionId {
    TransactionId(format!("DEP-{}-{:04}", at.format("%Y%m%d%H%M%S"), sequence))
}

impl DepositRecorder for LocalDepositRecorder {
    fn process_deposit(
        &self,
        email: &str,
        amount: FiatAmount,
        method: &str,
    ) -> Result<TransactionId, ApiError> {
        if email.trim().is_empty() {
            anyhow::bail!("cannot record a deposit without an email");
        }
        if amount.as_minor_units() <= 0 {
            anyhow::bail!("deposit amount must be positive, got {}", amount);
        }

        let previous = self.load_records()?;
        let now = Utc::now();
        let id = transaction_id_for(now, previous.len() + 1);

        let mut records = previous.clone();
        records.push(DepositRecord {
            id: id.clone(),
            email: email.to_string(),
            amount,
            method: method.to_string(),
            status: DepositStatus::Pending,
            created_at: now,
        });
        self.save_records(&records)?;
        if let Err(e) = self.credit_balance(email, amount) {
            // a failed deposit must not linger in the history
            if let Err(rollback) = self.save_records(&previous) {
                error!("could not roll back deposit {}: {:#}", id, rollback);
            }
            return Err(e);
        }

        info!(
            "recorded deposit {} of {} via {}",
            id,
            amount.to_string_with_code(),
            method
        );
        Ok(id)
    }
}

/// Sum of the given records. `None` when they mix currencies or overflow.
pub fn deposit_total(records: &[DepositRecord]) -> Option<FiatAmount> {
    let first = records.first()?;
    records[1..]
        .iter()
        .try_fold(first.amount, |acc, r| acc.checked_add(&r.amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiat_currency::FiatCurrency;
    use crate::session::MemoryStore;
    use crate::session::User;
    use crate::session::USER_STORAGE_KEY;
    use chrono::TimeZone;

    fn eur(major: i64) -> FiatAmount {
        FiatAmount::new_from_major(major, FiatCurrency::EUR)
    }

    fn setup() -> (SessionContext, LocalDepositRecorder) {
        let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
        (
            SessionContext::new(store.clone()),
            LocalDepositRecorder::new(store),
        )
    }

    #[test]
    fn transaction_id_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(transaction_id_for(at, 7).as_str(), "DEP-20240309140507-0007");
    }

    #[test]
    fn records_and_lists_history_per_user() {
        let (_, recorder) = setup();
        let first = recorder
            .process_deposit("a@example.com", eur(50), "bank-transfer")
            .unwrap();
        let second = recorder
            .process_deposit("b@example.com", eur(20), "Bitcoin")
            .unwrap();
        let third = recorder
            .process_deposit("a@example.com", eur(10), "credit-card")
            .unwrap();

        assert_ne!(first, second);
        assert_ne!(first, third);
        assert!(third.as_str().ends_with("-0003"));

        let history = recorder.history("a@example.com").unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|r| r.status.is_pending()));
        assert_eq!(deposit_total(&history), Some(eur(60)));
        assert!(recorder.history("nobody@example.com").unwrap().is_empty());
    }

    #[test]
    fn credits_signed_in_user_only() {
        let (session, recorder) = setup();
        session
            .save_user(&User {
                email: "a@example.com".into(),
                balance: Some(100.0),
            })
            .unwrap();

        recorder
            .process_deposit("a@example.com", eur(50), "bank-transfer")
            .unwrap();
        assert_eq!(session.current_user().unwrap().balance, Some(150.0));

        recorder
            .process_deposit("z@example.com", eur(50), "bank-transfer")
            .unwrap();
        assert_eq!(session.current_user().unwrap().balance, Some(150.0));
    }

    #[test]
    fn credit_starts_from_default_balance() {
        let (session, recorder) = setup();
        session.save_user(&User::new("a@example.com")).unwrap();
        recorder
            .process_deposit("a@example.com", eur(10), "credit-card")
            .unwrap();
        assert_eq!(session.current_user().unwrap().balance, Some(50_010.0));
    }

    #[test]
    fn rejects_blank_email_and_non_positive_amounts() {
        let (_, recorder) = setup();
        assert!(recorder.process_deposit("", eur(10), "credit-card").is_err());
        assert!(recorder
            .process_deposit("a@example.com", eur(0), "credit-card")
            .is_err());
        assert!(recorder.history("a@example.com").unwrap().is_empty());
    }

    #[test]
    fn corrupt_history_surfaces_as_error() {
        let (session, recorder) = setup();
        session.store().set(DEPOSITS_STORAGE_KEY, "[oops").unwrap();
        assert!(recorder
            .process_deposit("a@example.com", eur(10), "credit-card")
            .is_err());
    }

    /// Store that refuses to persist the user record.
    struct UserWritesFail(MemoryStore);

    impl SessionStore for UserWritesFail {
        fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
            if key == USER_STORAGE_KEY {
                anyhow::bail!("quota exceeded");
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), ApiError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn failed_balance_credit_leaves_no_record() {
        let inner = MemoryStore::new();
        inner
            .set(USER_STORAGE_KEY, r#"{"email":"a@example.com","balance":100}"#)
            .unwrap();
        let store: Arc<dyn SessionStore> = Arc::new(UserWritesFail(inner));
        let session = SessionContext::new(store.clone());
        let recorder = LocalDepositRecorder::new(store);

        assert!(recorder
            .process_deposit("a@example.com", eur(50), "bank-transfer")
            .is_err());
        assert!(recorder.history("a@example.com").unwrap().is_empty());
        assert_eq!(session.current_user().unwrap().balance, Some(100.0));

        // a retry fails the same way instead of piling up deposits
        assert!(recorder
            .process_deposit("a@example.com", eur(50), "bank-transfer")
            .is_err());
        assert!(recorder.history("a@example.com").unwrap().is_empty());
    }

    #[test]
    fn credit_that_would_overflow_the_balance_is_refused() {
        let (session, recorder) = setup();
        session
            .save_user(&User {
                email: "a@example.com".into(),
                balance: Some(9e16),
            })
            .unwrap();

        assert!(recorder
            .process_deposit("a@example.com", eur(10_000_000_000_000_000), "bank-transfer")
            .is_err());
        assert!(recorder.history("a@example.com").unwrap().is_empty());
        assert_eq!(session.current_user().unwrap().balance, Some(9e16));
    }

    #[test]
    fn deposit_after_sign_out_reloads_as_no_session() {
        let (session, recorder) = setup();
        session.sign_in("a@example.com").unwrap();
        session.sign_out().unwrap();

        recorder
            .process_deposit("a@example.com", eur(10), "credit-card")
            .unwrap();
        // the page reloads the user after a deposit; nothing comes back
        assert_eq!(session.current_user(), None);
        assert_eq!(recorder.history("a@example.com").unwrap().len(), 1);
    }

    #[test]
    fn total_of_nothing_is_none() {
        assert_eq!(deposit_total(&[]), None);
    }
}
