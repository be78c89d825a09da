//! Mock connectors for the dalal service.
//!
//! - [`MockMarket`]: the stock service itself. Serves NSE fixture quotes, a
//!   fixed search catalog, templated news and synthetic price history.
//! - [`DynamicMockConnector`]: a scriptable connector for tests that need to
//!   force specific results or failures.
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use dalal_core::connector::{
    DalalConnector, HistoryProvider, NewsProvider, QuoteProvider, SearchProvider,
};
use dalal_core::{
    Bar, Clock, DalalError, NewsItem, PriceTable, ResolutionMode, SearchResult, SeriesGenerator,
    StockInfo, SystemClock, TimeframeTable,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Where the mock draws its randomness from.
enum RngSource {
    /// Fresh thread-local entropy on every call.
    Thread,
    /// A single seeded generator shared by all calls, for reproducible runs.
    Seeded(Mutex<StdRng>),
}

impl RngSource {
    fn with<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self {
            Self::Thread => f(&mut rand::rng()),
            Self::Seeded(m) => {
                let mut guard = m.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
        }
    }
}

/// Stock service connector backed by static fixtures and the series generator.
pub struct MockMarket {
    series: SeriesGenerator,
    clock: Arc<dyn Clock>,
    mode: ResolutionMode,
    rng: RngSource,
}

impl Default for MockMarket {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMarket {
    /// Lenient mock on the system clock (IST) with thread-local randomness.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a customized mock.
    #[must_use]
    pub fn builder() -> MockMarketBuilder {
        MockMarketBuilder::default()
    }

    /// How lookup misses are handled.
    #[must_use]
    pub const fn mode(&self) -> ResolutionMode {
        self.mode
    }

    /// Reference prices of the fixture stocks.
    #[must_use]
    pub fn reference_prices() -> PriceTable {
        fixtures::stocks::price_table()
    }

    /// In strict mode a symbol is known when it has a reference price, on every capability.
    fn ensure_known(&self, symbol: &str) -> Result<(), DalalError> {
        if self.mode.substitutes() || self.series.prices().contains(symbol) {
            Ok(())
        } else {
            Err(DalalError::unknown_symbol(symbol))
        }
    }
}

/// Builder for [`MockMarket`].
pub struct MockMarketBuilder {
    timeframes: TimeframeTable,
    prices: PriceTable,
    clock: Arc<dyn Clock>,
    mode: ResolutionMode,
    seed: Option<u64>,
}

impl Default for MockMarketBuilder {
    fn default() -> Self {
        Self {
            timeframes: TimeframeTable::default(),
            prices: fixtures::stocks::price_table(),
            clock: Arc::new(SystemClock::default()),
            mode: ResolutionMode::default(),
            seed: None,
        }
    }
}

impl MockMarketBuilder {
    /// Clock used for series sampling and news dates.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Lenient (substitute defaults) or strict (report unknown inputs).
    #[must_use]
    pub const fn mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Seed a shared RNG so that a sequence of calls is reproducible.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the timeframe table.
    #[must_use]
    pub fn timeframes(mut self, table: TimeframeTable) -> Self {
        self.timeframes = table;
        self
    }

    /// Replace the reference prices used as walk starting points.
    #[must_use]
    pub fn prices(mut self, table: PriceTable) -> Self {
        self.prices = table;
        self
    }

    /// Finish the mock.
    #[must_use]
    pub fn build(self) -> MockMarket {
        let rng = self.seed.map_or(RngSource::Thread, |s| {
            RngSource::Seeded(Mutex::new(StdRng::seed_from_u64(s)))
        });
        MockMarket {
            series: SeriesGenerator::new(self.timeframes, self.prices)
                .with_clock(Arc::clone(&self.clock)),
            clock: self.clock,
            mode: self.mode,
            rng,
        }
    }
}

impl DalalConnector for MockMarket {
    fn name(&self) -> &'static str {
        "dalal-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockMarket {
    async fn history(&self, symbol: &str, timeframe: &str) -> Result<Vec<Bar>, DalalError> {
        let now = self.clock.now();
        match self.mode {
            ResolutionMode::Strict => self
                .rng
                .with(|rng| self.series.try_generate_with(symbol, timeframe, now, rng)),
            _ => Ok(self
                .rng
                .with(|rng| self.series.generate_with(symbol, timeframe, now, rng))),
        }
    }
}

#[async_trait]
impl QuoteProvider for MockMarket {
    async fn quote(&self, symbol: &str) -> Result<StockInfo, DalalError> {
        self.ensure_known(symbol)?;
        if let Some(info) = fixtures::stocks::by_symbol(symbol) {
            return Ok(info);
        }
        // Table symbols without a fixture quote at their reference price.
        let reference = self.series.prices().reference_price(symbol);
        Ok(self.rng.with(|rng| {
            let mut info = fixtures::stocks::random_info(symbol, rng);
            if let Some(price) = reference {
                info.current_price = price;
            }
            info
        }))
    }
}

#[async_trait]
impl SearchProvider for MockMarket {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, DalalError> {
        Ok(fixtures::search::search(query))
    }
}

#[async_trait]
impl NewsProvider for MockMarket {
    async fn news(&self, symbol: &str) -> Result<Vec<NewsItem>, DalalError> {
        self.ensure_known(symbol)?;
        let today = self.clock.now().date();
        let company = fixtures::stocks::name_of(symbol);
        Ok(self
            .rng
            .with(|rng| fixtures::news::for_symbol(symbol, company, today, rng)))
    }
}
