//! Currency codes
//!
//! A currency is stored as its 3-letter code. Amounts are never converted
//! between currencies; the code only labels a record and picks a symbol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Codes the user can select for new expenses, with their display symbols
pub const SUPPORTED_CURRENCIES: [(&str, &str); 5] = [
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("INR", "₹"),
];

/// A 3-letter currency code, always upper-case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Parse and normalize a currency code
    pub fn parse(code: &str) -> Result<Self, CurrencyParseError> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyParseError(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Whether this code can be selected as the session currency
    pub fn is_supported(&self) -> bool {
        SUPPORTED_CURRENCIES.iter().any(|(code, _)| *code == self.0)
    }

    /// Display symbol; unknown codes fall back to "CODE "
    pub fn symbol(&self) -> String {
        SUPPORTED_CURRENCIES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, symbol)| symbol.to_string())
            .unwrap_or_else(|| format!("{} ", self.0))
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

/// Error for a string that is not a 3-letter code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyParseError(pub String);

impl fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid currency code: '{}' (expected 3 letters)", self.0)
    }
}

impl std::error::Error for CurrencyParseError {}
