//! Non-blocking user notifications ("toasts").

use std::time::Duration;

use crate::crypto_asset::CryptoAsset;

/// How long a toast stays up unless dismissed.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Older toasts are dropped once this many are showing.
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn deposit_submitted() -> Self {
        Self::info(
            "Deposit Submitted!",
            "Your deposit request has been submitted successfully",
        )
    }

    pub fn deposit_failed() -> Self {
        Self::error(
            "Deposit Failed",
            "Failed to process deposit. Please try again.",
        )
    }

    pub fn address_copied(asset: CryptoAsset) -> Self {
        Self::info(
            "Address Copied!",
            format!("{} address copied to clipboard", asset.code()),
        )
    }

    pub fn copy_failed() -> Self {
        Self::error("Copy Failed", "Failed to copy address to clipboard")
    }
}

/// A toast currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts in display order, oldest first, capped at [`MAX_TOASTS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Adds a toast and returns the id to expire or dismiss it with.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        id
    }

    /// Removes the toast with `id`. Unknown ids are ignored, since a toast
    /// may already be gone when its expiry fires.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_notifications() {
        let ok = Notification::address_copied(CryptoAsset::UsdtBep20);
        assert_eq!(ok.title, "Address Copied!");
        assert_eq!(ok.description, "USDT-BEP20 address copied to clipboard");
        assert!(ok.variant.is_default());

        assert!(Notification::copy_failed().variant.is_destructive());
    }

    #[test]
    fn queue_keeps_the_newest_toasts() {
        let mut queue = ToastQueue::default();
        let ids: Vec<u64> = (0..5)
            .map(|i| queue.push(Notification::info(format!("t{i}"), "")))
            .collect();

        assert_eq!(queue.toasts().len(), MAX_TOASTS);
        let titles: Vec<&str> = queue.toasts().iter().map(|t| t.notification.title.as_str()).collect();
        assert_eq!(titles, ["t2", "t3", "t4"]);

        // ids stay unique after trimming
        assert_eq!(ids, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn expiry_removes_only_its_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::deposit_submitted());
        let second = queue.push(Notification::copy_failed());

        queue.remove(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);

        // the expiry of a toast already dismissed or trimmed is harmless
        queue.remove(first);
        assert_eq!(queue.toasts().len(), 1);
        queue.remove(second);
        assert!(queue.toasts().is_empty());
    }
}
