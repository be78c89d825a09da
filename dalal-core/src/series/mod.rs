//! Synthetic historical price-series generation.
//!
//! A series is produced in three stages:
//! - `calendar`: sample `now - span ..= now` at the timeframe's interval and
//!   keep only trading-day (and, intraday, in-session) timestamps.
//! - `walk`: run a bounded random walk from the symbol's base price and derive
//!   OHLCV values for each kept timestamp.
//! - `SeriesGenerator`: resolve the symbol and timeframe against immutable
//!   tables, then glue the two stages together.
//!
//! Randomness is always injected. `SeriesGenerator::generate` is the only entry
//! point that reaches for the thread-local RNG and the configured clock.

pub mod calendar;
pub mod walk;

use std::sync::Arc;

use chrono::NaiveDateTime;
use rand::Rng;

use crate::clock::{Clock, SystemClock};
use crate::tables::{PriceTable, TimeframeTable};
use dalal_types::{Bar, DalalError, TimeframeSpec};

/// Lower bound of the randomized base price for unknown symbols.
pub const UNKNOWN_BASE_MIN: f64 = 1500.0;
/// Width of the randomized base price range for unknown symbols.
pub const UNKNOWN_BASE_RANGE: f64 = 1000.0;

/// Generates synthetic OHLCV series from reference tables.
#[derive(Clone)]
pub struct SeriesGenerator {
    timeframes: TimeframeTable,
    prices: PriceTable,
    clock: Arc<dyn Clock>,
}

impl SeriesGenerator {
    /// Generator over the given tables, sampling relative to the system clock.
    #[must_use]
    pub fn new(timeframes: TimeframeTable, prices: PriceTable) -> Self {
        Self {
            timeframes,
            prices,
            clock: Arc::new(SystemClock::default()),
        }
    }

    /// Replace the clock used by [`generate`](Self::generate).
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The reference price table.
    #[must_use]
    pub const fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Lenient generation against the configured clock and the thread-local RNG.
    ///
    /// Never fails: unknown timeframes fall back and unknown symbols get a
    /// random base price.
    #[must_use]
    pub fn generate(&self, symbol: &str, timeframe: &str) -> Vec<Bar> {
        self.generate_with(symbol, timeframe, self.clock.now(), &mut rand::rng())
    }

    /// Lenient generation with an explicit "now" and RNG.
    ///
    /// For a seeded RNG and a fixed `now` the output is fully reproducible.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal_core::series::generate",
            skip(self, rng),
            fields(symbol = symbol, timeframe = timeframe),
        )
    )]
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        symbol: &str,
        timeframe: &str,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Vec<Bar> {
        let base_price = self.base_price_or_random(symbol, rng);
        let spec = self.timeframe_or_fallback(timeframe);
        series_from(base_price, &spec, now, rng)
    }

    /// Strict generation: unknown timeframes and symbols are reported.
    ///
    /// The timeframe is resolved first, so a request with both an unknown
    /// code and an unknown symbol reports the timeframe.
    ///
    /// # Errors
    /// - `DalalError::UnknownTimeframe` if the code is not in the timeframe table.
    /// - `DalalError::UnknownSymbol` if the symbol has no reference price.
    pub fn try_generate_with<R: Rng + ?Sized>(
        &self,
        symbol: &str,
        timeframe: &str,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Result<Vec<Bar>, DalalError> {
        let spec = self.timeframes.resolve(timeframe)?;
        let base_price = self.prices.resolve(symbol)?;
        Ok(series_from(base_price, &spec, now, rng))
    }

    /// Reference price of `symbol`, or a uniform draw from `[1500, 2500)`.
    ///
    /// Unknown symbols are re-randomized on every call.
    pub fn base_price_or_random<R: Rng + ?Sized>(&self, symbol: &str, rng: &mut R) -> f64 {
        self.prices.reference_price(symbol).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(symbol, "unknown symbol; randomizing base price");
            random_base_price(rng)
        })
    }

    /// Parameters for `timeframe`, or for the table's fallback code.
    #[must_use]
    pub fn timeframe_or_fallback(&self, timeframe: &str) -> TimeframeSpec {
        #[cfg(feature = "tracing")]
        if self.timeframes.resolve(timeframe).is_err() {
            tracing::debug!(
                timeframe,
                fallback = self.timeframes.fallback_code(),
                "unknown timeframe; using fallback"
            );
        }
        self.timeframes.resolve_or_fallback(timeframe)
    }
}

/// Sample, filter and walk: the core of every generated series.
pub fn series_from<R: Rng + ?Sized>(
    base_price: f64,
    spec: &TimeframeSpec,
    now: NaiveDateTime,
    rng: &mut R,
) -> Vec<Bar> {
    let timestamps = calendar::trading_timestamps(now, spec);
    walk::walk(base_price, spec, &timestamps, rng)
}

/// Uniform draw from `[1500, 2500)`.
pub fn random_base_price<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    UNKNOWN_BASE_MIN + rng.random::<f64>() * UNKNOWN_BASE_RANGE
}
