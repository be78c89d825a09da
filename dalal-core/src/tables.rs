//! Immutable lookup tables handed to the series generator.

use std::collections::HashMap;

use dalal_types::{DalalError, Timeframe, TimeframeSpec};

/// Timeframe code to generation parameters, with a designated fallback code.
#[derive(Debug, Clone)]
pub struct TimeframeTable {
    entries: HashMap<String, TimeframeSpec>,
    fallback: String,
}

impl TimeframeTable {
    /// Build a table from `(code, spec)` pairs.
    ///
    /// # Errors
    /// Returns `DalalError::InvalidArg` if `fallback` is not one of the codes.
    pub fn new<I, S>(entries: I, fallback: &str) -> Result<Self, DalalError>
    where
        I: IntoIterator<Item = (S, TimeframeSpec)>,
        S: Into<String>,
    {
        let entries: HashMap<String, TimeframeSpec> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        if !entries.contains_key(fallback) {
            return Err(DalalError::invalid_arg(format!(
                "fallback timeframe {fallback} missing from table"
            )));
        }
        Ok(Self {
            entries,
            fallback: fallback.to_string(),
        })
    }

    /// Look up a code.
    ///
    /// # Errors
    /// Returns `DalalError::UnknownTimeframe` if the code is not in the table.
    pub fn resolve(&self, code: &str) -> Result<TimeframeSpec, DalalError> {
        self.entries
            .get(code)
            .copied()
            .ok_or_else(|| DalalError::unknown_timeframe(code))
    }

    /// Look up a code, substituting the fallback entry on a miss.
    #[must_use]
    pub fn resolve_or_fallback(&self, code: &str) -> TimeframeSpec {
        self.resolve(code).unwrap_or_else(|_| self.fallback_spec())
    }

    /// The code substituted for unknown timeframes.
    #[must_use]
    pub fn fallback_code(&self) -> &str {
        &self.fallback
    }

    /// Parameters of the fallback code.
    #[must_use]
    pub fn fallback_spec(&self) -> TimeframeSpec {
        // `new` guarantees the fallback is present.
        self.entries[&self.fallback]
    }
}

impl Default for TimeframeTable {
    /// The seven standard codes (`1d` .. `5y`) with `1mo` as fallback.
    fn default() -> Self {
        let entries = Timeframe::ALL
            .into_iter()
            .map(|tf| (tf.code().to_string(), TimeframeSpec::for_timeframe(tf)))
            .collect();
        Self {
            entries,
            fallback: Timeframe::OneMonth.code().to_string(),
        }
    }
}

/// Reference prices of known symbols; the starting point of a random walk.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    /// Build a table from `(symbol, price)` pairs.
    pub fn new<I, S>(prices: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            prices: prices.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Reference price of `symbol`, if known. Lookups are case-sensitive.
    #[must_use]
    pub fn reference_price(&self, symbol: &str) -> Option<f64> {
        self.prices.get(symbol).copied()
    }

    /// Like [`reference_price`](Self::reference_price) but as a typed lookup miss.
    ///
    /// # Errors
    /// Returns `DalalError::UnknownSymbol` if the symbol is not in the table.
    pub fn resolve(&self, symbol: &str) -> Result<f64, DalalError> {
        self.reference_price(symbol)
            .ok_or_else(|| DalalError::unknown_symbol(symbol))
    }

    /// Whether the symbol has a reference price.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.prices.contains_key(symbol)
    }
}
