//! Defines the mutable, reactive state for the application's UI.

use api::notification::ToastQueue;
use api::session::User;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// It is separate from the immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The signed-in user. `None` until a screen has loaded the session.
    pub user: Signal<Option<User>>,
    pub toasts: Signal<ToastQueue>,
}
