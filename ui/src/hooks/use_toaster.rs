use api::notification::Notification;
use api::notification::ToastQueue;
use api::notification::TOAST_DURATION;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

#[derive(Clone, Copy)]
pub struct Toaster {
    state: AppStateMut,
}

impl Toaster {
    /// Shows a non-blocking notification and schedules its removal.
    pub fn show(&mut self, notification: Notification) {
        if notification.variant.is_destructive() {
            dioxus_logger::tracing::warn!(
                "{}: {}",
                notification.title,
                notification.description
            );
        } else {
            dioxus_logger::tracing::info!(
                "{}: {}",
                notification.title,
                notification.description
            );
        }

        let mut toasts = self.state.toasts;
        let id = toasts.with_mut(|queue| queue.push(notification));

        // not tied to the calling screen, so the toast survives navigation
        spawn_forever(async move {
            crate::compat::sleep(TOAST_DURATION).await;
            toasts.with_mut(|queue| queue.remove(id));
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.state.toasts.with_mut(|queue| queue.remove(id));
    }

    /// Call .read() on this in a component to subscribe to changes.
    pub fn toasts(&self) -> Signal<ToastQueue> {
        self.state.toasts
    }
}

pub fn use_toaster() -> Toaster {
    let state = use_context::<AppStateMut>();
    Toaster { state }
}
