//! The deposit form and its submission workflow.
//!
//! A submission moves through `Idle -> Validating -> Submitting -> Succeeded`.
//! A failed validation or a failed recorder call goes straight back to
//! `Idle`, and closing the success dialog does the same.

use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::crypto_asset::CryptoAsset;
use crate::fiat_amount::FiatAmount;
use crate::fiat_currency::FiatCurrency;
use crate::notification::Notification;
use crate::recorder::DepositRecorder;
use crate::recorder::TransactionId;
use crate::ApiError;

/// Smallest accepted deposit, in major units of the deposit currency.
pub const MIN_DEPOSIT: i64 = 10;

/// Formats the minimum deposit for messages, e.g. "€10".
pub fn min_deposit_label(currency: FiatCurrency) -> String {
    currency.with_symbol(&MIN_DEPOSIT.to_string())
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
    Cryptocurrency,
}

impl PaymentMethod {
    /// The form value, e.g. `bank-transfer`.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit/Debit Card",
            Self::BankTransfer => "Bank Transfer",
            Self::Cryptocurrency => "Cryptocurrency",
        }
    }

    pub fn all() -> impl Iterator<Item = PaymentMethod> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

/// A validated deposit, ready for the recorder.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositRequest {
    pub amount: FiatAmount,
    pub method: PaymentMethod,
    pub crypto_asset: Option<CryptoAsset>,
}

impl DepositRequest {
    /// The method passed to the recorder: the asset's display name for crypto
    /// deposits, the method code otherwise.
    pub fn method_label(&self) -> &'static str {
        match (self.method, self.crypto_asset) {
            (PaymentMethod::Cryptocurrency, Some(asset)) => asset.name(),
            (method, _) => method.code(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepositValidationError {
    #[error("amount and payment method are required")]
    MissingInformation,
    #[error("amount is below the minimum deposit")]
    BelowMinimum { currency: FiatCurrency },
    #[error("amount cannot be represented in {currency:?}")]
    OutOfRange { currency: FiatCurrency },
    #[error("a cryptocurrency must be selected")]
    CryptoAssetRequired,
}

impl DepositValidationError {
    pub fn notification(&self) -> Notification {
        match self {
            Self::MissingInformation => Notification::error(
                "Missing Information",
                "Please fill in all required fields",
            ),
            Self::BelowMinimum { currency } => Notification::error(
                "Minimum Deposit",
                format!("Minimum deposit amount is {}", min_deposit_label(*currency)),
            ),
            Self::OutOfRange { .. } => Notification::error(
                "Invalid Amount",
                "Please enter a smaller deposit amount",
            ),
            Self::CryptoAssetRequired => Notification::error(
                "Select Cryptocurrency",
                "Please select a cryptocurrency for deposit",
            ),
        }
    }
}

/// Raw form fields as the user edits them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepositForm {
    pub amount: String,
    pub method: Option<PaymentMethod>,
    pub crypto_asset: Option<CryptoAsset>,
}

impl DepositForm {
    /// Whether every required field has a value. Drives the submit button.
    pub fn is_complete(&self) -> bool {
        !self.amount.trim().is_empty()
            && match self.method {
                None => false,
                Some(PaymentMethod::Cryptocurrency) => self.crypto_asset.is_some(),
                Some(_) => true,
            }
    }

    /// The asset whose address panel should be shown, if any.
    pub fn selected_asset(&self) -> Option<CryptoAsset> {
        match self.method {
            Some(PaymentMethod::Cryptocurrency) => self.crypto_asset,
            _ => None,
        }
    }

    /// Validates the fields in order; the first failing check wins.
    pub fn validate(&self, currency: FiatCurrency) -> Result<DepositRequest, DepositValidationError> {
        let method = match self.method {
            Some(method) if !self.amount.trim().is_empty() => method,
            _ => return Err(DepositValidationError::MissingInformation),
        };

        let value = match FiatAmount::parse_major(&self.amount) {
            Ok(value) if value >= MIN_DEPOSIT as f64 => value,
            _ => return Err(DepositValidationError::BelowMinimum { currency }),
        };
        let amount = FiatAmount::new_from_float(value, currency)
            .map_err(|_| DepositValidationError::OutOfRange { currency })?;

        if method.is_cryptocurrency() && self.crypto_asset.is_none() {
            return Err(DepositValidationError::CryptoAssetRequired);
        }

        Ok(DepositRequest {
            amount,
            method,
            crypto_asset: self.crypto_asset.filter(|_| method.is_cryptocurrency()),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What the success dialog shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositReceipt {
    pub transaction_id: TransactionId,
    /// The amount exactly as typed.
    pub amount_entered: String,
    pub amount: FiatAmount,
    pub method_label: String,
}

impl DepositReceipt {
    /// e.g. "€50" for an entered "50".
    pub fn display_amount(&self) -> String {
        self.amount.currency().with_symbol(&self.amount_entered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] DepositValidationError),
    #[error("a deposit is already being submitted")]
    InFlight,
    #[error("deposit could not be recorded: {0}")]
    Failed(String),
}

impl SubmitError {
    /// The toast to show, if any. An in-flight rejection is silent since the
    /// submit control is disabled while loading.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::Rejected(e) => Some(e.notification()),
            Self::InFlight => None,
            Self::Failed(_) => Some(Notification::deposit_failed()),
        }
    }
}

/// Form fields plus submission state for one deposit page.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositWorkflow {
    pub form: DepositForm,
    currency: FiatCurrency,
    phase: SubmissionPhase,
    receipt: Option<DepositReceipt>,
}

impl DepositWorkflow {
    pub fn new(currency: FiatCurrency) -> Self {
        Self {
            form: DepositForm::default(),
            currency,
            phase: SubmissionPhase::Idle,
            receipt: None,
        }
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_submitting()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.form.is_complete()
    }

    pub fn receipt(&self) -> Option<&DepositReceipt> {
        self.receipt.as_ref()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.phase.is_succeeded()
    }

    /// Validates the form and, on success, enters `Submitting`.
    pub fn begin(&mut self) -> Result<DepositRequest, SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::InFlight);
        }
        self.phase = SubmissionPhase::Validating;
        match self.form.validate(self.currency) {
            Ok(request) => {
                self.phase = SubmissionPhase::Submitting;
                Ok(request)
            }
            Err(e) => {
                info!("deposit rejected: {}", e);
                self.phase = SubmissionPhase::Idle;
                Err(e.into())
            }
        }
    }

    /// Applies the recorder's answer to a request obtained from [`Self::begin`].
    ///
    /// Success resets the form and opens the dialog. Failure keeps the form so
    /// the user can try again.
    pub fn finish(
        &mut self,
        request: &DepositRequest,
        outcome: Result<TransactionId, ApiError>,
    ) -> Result<DepositReceipt, SubmitError> {
        match outcome {
            Ok(transaction_id) => {
                let receipt = DepositReceipt {
                    transaction_id,
                    amount_entered: self.form.amount.trim().to_string(),
                    amount: request.amount,
                    method_label: request.method_label().to_string(),
                };
                self.form.reset();
                self.receipt = Some(receipt.clone());
                self.phase = SubmissionPhase::Succeeded;
                Ok(receipt)
            }
            Err(e) => {
                error!("Deposit error: {:#}", e);
                self.phase = SubmissionPhase::Idle;
                Err(SubmitError::Failed(e.to_string()))
            }
        }
    }

    /// Validates, records through `recorder` on behalf of `email`, and applies
    /// the outcome.
    pub fn submit(
        &mut self,
        email: &str,
        recorder: &dyn DepositRecorder,
    ) -> Result<DepositReceipt, SubmitError> {
        let request = self.begin()?;
        let outcome = recorder.process_deposit(email, request.amount, request.method_label());
        self.finish(&request, outcome)
    }

    /// Closes the success dialog.
    pub fn dismiss(&mut self) {
        if self.phase.is_succeeded() {
            self.phase = SubmissionPhase::Idle;
        }
    }
}
