//! Tracks which wallet address was just copied, for the transient ✓ marker.

use std::time::Duration;

use crate::crypto_asset::CryptoAsset;

/// Default time the marker stays visible.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Handle for clearing the mark set by one particular copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// At most one asset is marked at a time. A newer copy replaces the mark,
/// and the delayed clear of an older copy leaves the newer mark alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyMarker {
    current: Option<(CryptoAsset, CopyTicket)>,
    issued: u64,
}

impl CopyMarker {
    pub fn mark(&mut self, asset: CryptoAsset) -> CopyTicket {
        self.issued += 1;
        let ticket = CopyTicket(self.issued);
        self.current = Some((asset, ticket));
        ticket
    }

    /// Clears the mark if it still belongs to `ticket`.
    pub fn clear(&mut self, ticket: CopyTicket) {
        if matches!(self.current, Some((_, current)) if current == ticket) {
            self.current = None;
        }
    }

    pub fn copied(&self) -> Option<CryptoAsset> {
        self.current.map(|(asset, _)| asset)
    }

    pub fn is_copied(&self, asset: CryptoAsset) -> bool {
        self.copied() == Some(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_one_asset_at_a_time() {
        let mut marker = CopyMarker::default();
        assert_eq!(marker.copied(), None);

        marker.mark(CryptoAsset::Btc);
        assert!(marker.is_copied(CryptoAsset::Btc));

        marker.mark(CryptoAsset::Eth);
        assert!(marker.is_copied(CryptoAsset::Eth));
        assert!(!marker.is_copied(CryptoAsset::Btc));
    }

    #[test]
    fn clear_only_removes_its_own_mark() {
        let mut marker = CopyMarker::default();
        let old = marker.mark(CryptoAsset::Btc);
        let new = marker.mark(CryptoAsset::UsdtTrc20);

        marker.clear(old);
        assert_eq!(marker.copied(), Some(CryptoAsset::UsdtTrc20));

        marker.clear(new);
        assert_eq!(marker.copied(), None);
    }

    #[test]
    fn recopying_same_asset_extends_the_mark() {
        let mut marker = CopyMarker::default();
        let first = marker.mark(CryptoAsset::Eth);
        let second = marker.mark(CryptoAsset::Eth);
        assert_ne!(first, second);

        marker.clear(first);
        assert!(marker.is_copied(CryptoAsset::Eth));
        marker.clear(second);
        assert!(!marker.is_copied(CryptoAsset::Eth));
    }
}
