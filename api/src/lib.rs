//! Platform independent domain of the deposit page: money, assets, the
//! signed-in user, and the submission workflow.

pub mod copy_marker;
pub mod crypto_asset;
pub mod deposit;
pub mod fiat_amount;
pub mod fiat_currency;
pub mod notification;
pub mod prefs;
pub mod recorder;
pub mod session;

pub type ApiError = anyhow::Error;
