use dioxus::prelude::*;

use crate::hooks::use_toaster::use_toaster;

/// Stack of non-blocking notifications in the bottom-right corner.
#[component]
pub fn ToastStack() -> Element {
    let mut toaster = use_toaster();
    let toasts = toaster.toasts();

    rsx! {
        div {
            style: "position: fixed; right: 1rem; bottom: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 1000; max-width: 22rem;",
            for toast in toasts.read().toasts().iter().cloned() {
                article {
                    key: "{toast.id}",
                    role: if toast.notification.variant.is_destructive() { "alert" } else { "status" },
                    style: if toast.notification.variant.is_destructive() {
                        "margin: 0; padding: 0.75rem 1rem; border-left: 4px solid var(--pico-del-color);"
                    } else {
                        "margin: 0; padding: 0.75rem 1rem; border-left: 4px solid var(--pico-ins-color);"
                    },
                    onclick: move |_| toaster.dismiss(toast.id),
                    strong { "{toast.notification.title}" }
                    br {}
                    small { "{toast.notification.description}" }
                }
            }
        }
    }
}
