//! Defines the fiat currencies a deposit can be denominated in.

use serde::Deserialize;
use serde::Serialize;

/// A fiat currency, with its code, symbol, and formatting rules.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    CHF, // Swiss Franc
    DKK, // Danish Krone
    #[default]
    EUR, // Euro
    GBP, // Great British Pound
    JPY, // Japanese Yen
    NOK, // Norwegian Krone
    PLN, // Polish Złoty
    SEK, // Swedish Krona
    USD, // United States Dollar
}

impl FiatCurrency {
    /// Returns the number of decimal digits used by the currency.
    ///
    /// EUR uses 2 decimal places (cents), while JPY uses 0.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the graphical symbol for the currency (e.g., '€').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::CHF => "CHF",
            Self::DKK => "kr",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::NOK => "kr",
            Self::PLN => "zł",
            Self::SEK => "kr",
            Self::USD => "$",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "EUR").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CHF => "Swiss Franc",
            Self::DKK => "Danish Krone",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::JPY => "Japanese Yen",
            Self::NOK => "Norwegian Krone",
            Self::PLN => "Polish Złoty",
            Self::SEK => "Swedish Krona",
            Self::USD => "United States Dollar",
        }
    }

    /// Prefixes a pre-formatted number with the currency symbol.
    ///
    /// Alphabetic symbols such as "CHF" get a separating space, the way
    /// browsers render them: `€10` but `CHF 10`.
    pub fn with_symbol(&self, amt: &str) -> String {
        let symbol = self.symbol();
        if symbol.chars().all(char::is_alphabetic) {
            format!("{} {}", symbol, amt)
        } else {
            format!("{}{}", symbol, amt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(FiatCurrency::from_str("eur"), Ok(FiatCurrency::EUR));
        assert_eq!(FiatCurrency::from_str("Usd"), Ok(FiatCurrency::USD));
        assert!(FiatCurrency::from_str("XYZ").is_err());
    }

    #[test]
    fn symbol_spacing() {
        assert_eq!(FiatCurrency::EUR.with_symbol("10"), "€10");
        assert_eq!(FiatCurrency::CHF.with_symbol("10"), "CHF 10");
        assert_eq!(FiatCurrency::NOK.with_symbol("10"), "kr 10");
    }

    #[test]
    fn default_is_euro() {
        assert_eq!(FiatCurrency::default().code(), "EUR");
    }
}
