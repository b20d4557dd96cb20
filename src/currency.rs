//! Currency list, symbol lookup and default prices.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DEFAULT_CURRENCY: &str = "EGP";

pub const COMMON_CURRENCIES: [&str; 17] = [
    "EGP", "USD", "EUR", "GBP", "AUD", "CAD", "CHF", "CNY", "JPY", "NZD", "SGD", "HKD", "SEK",
    "KRW", "INR", "BRL", "ZAR",
];

/// Resolves an ISO 4217 code to its display symbol.
pub trait SymbolLookup {
    fn symbol(&self, code: &str) -> Option<String>;
}

impl<F> SymbolLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn symbol(&self, code: &str) -> Option<String> {
        self(code)
    }
}

/// en-US symbols for the common currencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSymbols;

static SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USD", "$"),
        ("EUR", "€"),
        ("GBP", "£"),
        ("AUD", "A$"),
        ("CAD", "CA$"),
        ("CHF", "CHF"),
        ("CNY", "CN¥"),
        ("JPY", "¥"),
        ("NZD", "NZ$"),
        ("HKD", "HK$"),
        ("KRW", "₩"),
        ("INR", "₹"),
        ("BRL", "R$"),
        // No narrower en-US symbol than the code itself
        ("EGP", "EGP"),
        ("SGD", "SGD"),
        ("SEK", "SEK"),
        ("ZAR", "ZAR"),
    ])
});

impl SymbolLookup for BuiltinSymbols {
    fn symbol(&self, code: &str) -> Option<String> {
        SYMBOLS.get(code).map(|s| (*s).to_string())
    }
}

/// Symbol for `code`, or the code followed by a space when the lookup has none.
pub fn currency_symbol(lookup: &impl SymbolLookup, code: &str) -> String {
    match lookup.symbol(code) {
        Some(symbol) => symbol,
        None => {
            tracing::debug!(code, "no currency symbol, falling back to code");
            format!("{code} ")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultPrices {
    pub gas: f64,
    pub ethanol: f64,
}

pub fn default_prices(code: &str) -> DefaultPrices {
    if code == "EGP" {
        DefaultPrices {
            gas: 17.00,
            ethanol: 100.00,
        }
    } else {
        DefaultPrices {
            gas: 1.50,
            ethanol: 1.20,
        }
    }
}
