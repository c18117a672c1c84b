//! Quote currencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fiat currency prices are quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Inr,
    Gbp,
    Cad,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Inr,
        Currency::Gbp,
        Currency::Cad,
    ];

    /// Lowercase code as used by the CoinGecko API.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Inr => "inr",
            Currency::Gbp => "gbp",
            Currency::Cad => "cad",
        }
    }

    /// Display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Inr => "₹",
            Currency::Gbp => "£",
            Currency::Cad => "C$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == lower)
            .ok_or_else(|| format!("Unsupported currency: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parse() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" inr ".parse::<Currency>().unwrap(), Currency::Inr);
        assert!("jpy".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Cad.symbol(), "C$");
        assert_eq!(Currency::Gbp.to_string(), "gbp");
    }
}
