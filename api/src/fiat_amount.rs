//! Provides a safe, self-contained type for representing fiat currency amounts.

use std::fmt;

use num_traits::CheckedAdd;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::fiat_currency::FiatCurrency;

/// An error that can occur when parsing user input into an amount.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseFiatAmountError {
    /// Nothing but whitespace was entered.
    #[error("no amount entered")]
    Empty,
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid fiat amount format")]
    InvalidFormat,
    /// The string parsed to NaN or infinity.
    #[error("amount is not a finite number")]
    NotFinite,
    /// The value has no representation in the currency's minor units.
    #[error("amount is out of range")]
    OutOfRange,
}

/// Represents a monetary value in a specific fiat currency.
///
/// Internally, the amount is stored as a signed 64-bit integer in the currency's
/// smallest unit (e.g., cents for EUR) to prevent floating-point inaccuracies.
/// The default `Display` implementation formats this as a plain numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatAmount {
    amount: i64,
    currency: FiatCurrency,
}

impl FiatAmount {
    /// Returns the currency type of the amount.
    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Returns the raw amount in the currency's smallest unit (e.g., cents).
    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    /// Returns the amount in major units as a float, for interop with
    /// collaborators that keep balances as plain numbers.
    pub fn as_major_f64(&self) -> f64 {
        self.amount as f64 / 10_f64.powi(self.currency.decimals() as i32)
    }

    /// Creates a new `FiatAmount` from a floating-point value.
    ///
    /// The float is converted to an integer representation by rounding to the
    /// nearest minor unit based on the currency's number of decimal places.
    ///
    /// # Examples
    /// ```
    /// use api::fiat_amount::FiatAmount;
    /// use api::fiat_currency::FiatCurrency;
    /// let amount = FiatAmount::new_from_float(123.456, FiatCurrency::EUR).unwrap();
    /// assert_eq!(amount.as_minor_units(), 12346);
    /// ```
    ///
    /// Fails instead of saturating when the rounded value does not fit in an
    /// `i64` of minor units.
    pub fn new_from_float(value: f64, currency: FiatCurrency) -> Result<Self, ParseFiatAmountError> {
        if !value.is_finite() {
            return Err(ParseFiatAmountError::NotFinite);
        }
        let decimals = currency.decimals();
        let multiplier = 10_f64.powi(decimals as i32);
        let scaled = (value * multiplier).round();

        // i64::MAX is not representable as f64; 2^63 is the first value past it
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        if !(-LIMIT..LIMIT).contains(&scaled) {
            return Err(ParseFiatAmountError::OutOfRange);
        }

        Ok(Self {
            amount: scaled as i64,
            currency,
        })
    }

    /// Creates a new `FiatAmount` directly from its smallest unit.
    pub fn new_from_minor(amount: i64, currency: FiatCurrency) -> Self {
        Self { amount, currency }
    }

    /// Creates a new `FiatAmount` from whole major units (e.g. euros).
    pub fn new_from_major(major: i64, currency: FiatCurrency) -> Self {
        let multiplier = 10_i64.pow(currency.decimals() as u32);
        Self::new_from_minor(major.saturating_mul(multiplier), currency)
    }

    /// Parses an amount typed into a form field into major units.
    ///
    /// Surrounding whitespace is ignored. The result must be a finite number;
    /// no currency-specific precision check is applied, matching a numeric
    /// input with a free-form step.
    pub fn parse_major(s: &str) -> Result<f64, ParseFiatAmountError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseFiatAmountError::Empty);
        }
        let value = s
            .parse::<f64>()
            .map_err(|_| ParseFiatAmountError::InvalidFormat)?;
        if !value.is_finite() {
            return Err(ParseFiatAmountError::NotFinite);
        }
        Ok(value)
    }

    /// Formats the amount with its currency symbol (e.g., "€25.34").
    pub fn to_string_with_symbol(&self) -> String {
        self.currency.with_symbol(&self.to_string())
    }

    /// Formats the amount with its currency code (e.g., "25.34 EUR").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }

    /// Formats the amount with thousands separators and symbol (e.g., "€50,000.00").
    pub fn to_grouped_string_with_symbol(&self) -> String {
        let plain = self.to_string();
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (major, minor) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (unsigned, None),
        };

        let mut grouped = String::with_capacity(major.len() + major.len() / 3);
        for (i, ch) in major.chars().enumerate() {
            if i > 0 && (major.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if let Some(minor) = minor {
            grouped.push('.');
            grouped.push_str(minor);
        }

        format!("{}{}", sign, self.currency.with_symbol(&grouped))
    }
}

/// Formats the amount as a numeric string (e.g., "25.34").
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;

        if decimals == 0 {
            return write!(f, "{}", self.amount);
        }

        let divisor = 10_i64.pow(decimals as u32);
        let major_units = (self.amount / divisor).unsigned_abs();
        let minor_units = (self.amount % divisor).unsigned_abs();
        let sign = if self.amount < 0 { "-" } else { "" };

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            major_units,
            minor_units,
            width = decimals
        )
    }
}

/// Checked addition. Returns `None` if currencies mismatch or if addition overflows.
impl CheckedAdd for FiatAmount {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        if self.currency != v.currency {
            return None;
        }
        self.amount.checked_add(v.amount).map(|new_amount| Self {
            amount: new_amount,
            currency: self.currency,
        })
    }
}

// `CheckedAdd` requires `Add` as a supertrait.
impl std::ops::Add for FiatAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.currency, rhs.currency,
            "cannot add amounts of different currencies"
        );
        Self {
            amount: self.amount + rhs.amount,
            currency: self.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_major_accepts_plain_and_padded_numbers() {
        assert_eq!(FiatAmount::parse_major("50"), Ok(50.0));
        assert_eq!(FiatAmount::parse_major("  12.5 "), Ok(12.5));
        assert_eq!(FiatAmount::parse_major("1e2"), Ok(100.0));
    }

    #[test]
    fn parse_major_rejects_garbage() {
        assert_eq!(FiatAmount::parse_major(""), Err(ParseFiatAmountError::Empty));
        assert_eq!(FiatAmount::parse_major("   "), Err(ParseFiatAmountError::Empty));
        assert_eq!(
            FiatAmount::parse_major("abc"),
            Err(ParseFiatAmountError::InvalidFormat)
        );
        assert_eq!(
            FiatAmount::parse_major("NaN"),
            Err(ParseFiatAmountError::NotFinite)
        );
        assert_eq!(
            FiatAmount::parse_major("inf"),
            Err(ParseFiatAmountError::NotFinite)
        );
    }

    #[test]
    fn display_formats() {
        let amt = FiatAmount::new_from_minor(5_000_000, FiatCurrency::EUR);
        assert_eq!(amt.to_string(), "50000.00");
        assert_eq!(amt.to_string_with_symbol(), "€50000.00");
        assert_eq!(amt.to_string_with_code(), "50000.00 EUR");
        assert_eq!(amt.to_grouped_string_with_symbol(), "€50,000.00");

        let small = FiatAmount::new_from_minor(-5, FiatCurrency::EUR);
        assert_eq!(small.to_string(), "-0.05");

        let yen = FiatAmount::new_from_major(1_234_567, FiatCurrency::JPY);
        assert_eq!(yen.to_grouped_string_with_symbol(), "¥1,234,567");

        let neg = FiatAmount::new_from_minor(-123_456, FiatCurrency::USD);
        assert_eq!(neg.to_grouped_string_with_symbol(), "-$1,234.56");
    }

    #[test]
    fn checked_add_refuses_mixed_currencies() {
        let a = FiatAmount::new_from_major(10, FiatCurrency::EUR);
        let b = FiatAmount::new_from_major(5, FiatCurrency::EUR);
        let c = FiatAmount::new_from_major(5, FiatCurrency::USD);

        assert_eq!(
            a.checked_add(&b),
            Some(FiatAmount::new_from_major(15, FiatCurrency::EUR))
        );
        assert_eq!(a.checked_add(&c), None);
    }

    #[test]
    fn major_float_round_trip() {
        let amt = FiatAmount::new_from_float(49.99, FiatCurrency::EUR).unwrap();
        assert_eq!(amt.as_minor_units(), 4999);
        assert!((amt.as_major_f64() - 49.99).abs() < 1e-9);
    }

    #[test]
    fn new_from_float_refuses_values_beyond_minor_units() {
        assert_eq!(
            FiatAmount::new_from_float(1e300, FiatCurrency::EUR),
            Err(ParseFiatAmountError::OutOfRange)
        );
        assert_eq!(
            FiatAmount::new_from_float(-1e300, FiatCurrency::EUR),
            Err(ParseFiatAmountError::OutOfRange)
        );
        // 1e17 euros is 1e19 cents, past i64::MAX; as yen it still fits
        assert_eq!(
            FiatAmount::new_from_float(1e17, FiatCurrency::EUR),
            Err(ParseFiatAmountError::OutOfRange)
        );
        assert!(FiatAmount::new_from_float(1e17, FiatCurrency::JPY).is_ok());
        assert_eq!(
            FiatAmount::new_from_float(f64::NAN, FiatCurrency::EUR),
            Err(ParseFiatAmountError::NotFinite)
        );
    }

    #[test]
    fn display_handles_extreme_amounts() {
        let min = FiatAmount::new_from_minor(i64::MIN, FiatCurrency::EUR);
        assert_eq!(min.to_string(), "-92233720368547758.08");
        assert_eq!(
            min.to_grouped_string_with_symbol(),
            "-€92,233,720,368,547,758.08"
        );

        let max = FiatAmount::new_from_minor(i64::MAX, FiatCurrency::EUR);
        assert_eq!(max.to_string(), "92233720368547758.07");
    }
}
