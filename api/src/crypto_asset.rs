//! The fixed set of crypto assets accepted for deposits, and their receiving
//! wallets.

use serde::Deserialize;
use serde::Serialize;

/// Static metadata for one crypto asset/network combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoAssetInfo {
    /// Receiving wallet address shown to the user.
    pub address: &'static str,
    /// Human readable network label.
    pub network: &'static str,
    /// Confirmation count before funds are credited, as display text.
    pub confirmations: &'static str,
    /// Display name, also used as the deposit method label.
    pub name: &'static str,
}

const BTC_INFO: CryptoAssetInfo = CryptoAssetInfo {
    address: "1EwSeZbK8RW5EgRc96RnhjcLmGQA6zZ2RV",
    network: "Bitcoin Network",
    confirmations: "3 blocks",
    name: "Bitcoin",
};

const ETH_INFO: CryptoAssetInfo = CryptoAssetInfo {
    address: "0x4c2bba6f32aa4b804c43dd25c4c3c311dd8016cf",
    network: "Ethereum Network",
    confirmations: "12 blocks",
    name: "Ethereum",
};

const USDT_ERC20_INFO: CryptoAssetInfo = CryptoAssetInfo {
    address: "0x4c2bba6f32aa4b804c43dd25c4c3c311dd8016cf",
    network: "Ethereum (ERC-20)",
    confirmations: "12 blocks",
    name: "USDT (ERC-20)",
};

const USDT_BEP20_INFO: CryptoAssetInfo = CryptoAssetInfo {
    address: "0x4c2bba6f32aa4b804c43dd25c4c3c311dd8016cf",
    network: "Binance Smart Chain (BEP-20)",
    confirmations: "15 blocks",
    name: "USDT (BEP-20)",
};

const USDT_TRC20_INFO: CryptoAssetInfo = CryptoAssetInfo {
    address: "TFBXLYCcuDLJqkN7ggxzfKMHmW64L7u9AA",
    network: "Tron (TRC-20)",
    confirmations: "20 blocks",
    name: "USDT (TRC-20)",
};

/// A supported crypto asset. The string form is the asset code used in
/// form values and notifications, e.g. `USDT-TRC20`.
///
/// Unknown codes fail to parse, so lookups can never come back empty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum CryptoAsset {
    #[strum(serialize = "BTC")]
    #[serde(rename = "BTC")]
    Btc,
    #[strum(serialize = "ETH")]
    #[serde(rename = "ETH")]
    Eth,
    #[strum(serialize = "USDT-ERC20")]
    #[serde(rename = "USDT-ERC20")]
    UsdtErc20,
    #[strum(serialize = "USDT-BEP20")]
    #[serde(rename = "USDT-BEP20")]
    UsdtBep20,
    #[strum(serialize = "USDT-TRC20")]
    #[serde(rename = "USDT-TRC20")]
    UsdtTrc20,
}

impl CryptoAsset {
    pub fn info(&self) -> &'static CryptoAssetInfo {
        match self {
            Self::Btc => &BTC_INFO,
            Self::Eth => &ETH_INFO,
            Self::UsdtErc20 => &USDT_ERC20_INFO,
            Self::UsdtBep20 => &USDT_BEP20_INFO,
            Self::UsdtTrc20 => &USDT_TRC20_INFO,
        }
    }

    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn address(&self) -> &'static str {
        self.info().address
    }

    /// All assets in display order.
    pub fn all() -> impl Iterator<Item = CryptoAsset> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    /// Warnings shown next to the receiving address.
    ///
    /// `minimum` is the already formatted minimum deposit, e.g. "€10".
    pub fn deposit_instructions(&self, minimum: &str) -> Vec<String> {
        let info = self.info();
        vec![
            format!("Only send {} to this address", info.name),
            format!("Ensure you're using the correct network: {}", info.network),
            format!("Minimum deposit: equivalent of {}", minimum),
            format!(
                "Funds will be credited after {} confirmations",
                info.confirmations
            ),
            "Sending wrong cryptocurrency or using wrong network will result in permanent loss"
                .to_string(),
        ]
    }

    /// Step-by-step guide for depositing this asset.
    pub fn how_to_steps(&self) -> [String; 5] {
        [
            "Copy the wallet address above".to_string(),
            "Open your crypto wallet or exchange".to_string(),
            format!("Send your {} to the copied address", self.name()),
            "Wait for network confirmations".to_string(),
            "Your balance will be updated automatically".to_string(),
        ]
    }
}

impl std::fmt::Display for CryptoAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn every_code_parses_back_to_its_asset() {
        for asset in CryptoAsset::all() {
            assert_eq!(CryptoAsset::from_str(asset.code()), Ok(asset));
        }
        assert_eq!(CryptoAsset::all().count(), 5);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(CryptoAsset::from_str("DOGE").is_err());
        assert!(CryptoAsset::from_str("usdt-trc20").is_err());
        assert!(CryptoAsset::from_str("").is_err());
    }

    #[test]
    fn table_values() {
        let trc = CryptoAsset::UsdtTrc20.info();
        assert_eq!(trc.address, "TFBXLYCcuDLJqkN7ggxzfKMHmW64L7u9AA");
        assert_eq!(trc.network, "Tron (TRC-20)");
        assert_eq!(trc.confirmations, "20 blocks");
        assert_eq!(CryptoAsset::Btc.name(), "Bitcoin");
        assert_eq!(CryptoAsset::UsdtBep20.info().confirmations, "15 blocks");
    }

    #[test]
    fn serde_uses_asset_codes() {
        let json = serde_json::to_string(&CryptoAsset::UsdtErc20).unwrap();
        assert_eq!(json, "\"USDT-ERC20\"");
        let back: CryptoAsset = serde_json::from_str("\"ETH\"").unwrap();
        assert_eq!(back, CryptoAsset::Eth);
    }

    #[test]
    fn instructions_mention_network_and_minimum() {
        let lines = CryptoAsset::Eth.deposit_instructions("€10");
        assert_eq!(lines[0], "Only send Ethereum to this address");
        assert!(lines[1].ends_with("Ethereum Network"));
        assert_eq!(lines[2], "Minimum deposit: equivalent of €10");
        assert_eq!(
            lines[3],
            "Funds will be credited after 12 blocks confirmations"
        );
    }
}
