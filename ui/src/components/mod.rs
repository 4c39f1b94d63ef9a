//! Shared building blocks for the screens.
pub mod action_link;
pub mod crypto_address;
pub mod empty_state;
pub mod pico;
pub mod qr_code;
pub mod success_dialog;
pub mod toast;
