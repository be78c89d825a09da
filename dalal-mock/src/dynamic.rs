use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dalal_core::connector::{
    DalalConnector, HistoryProvider, NewsProvider, QuoteProvider, SearchProvider,
};
use dalal_core::{Bar, DalalError, NewsItem, SearchResult, StockInfo};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(DalalError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    quote_rules: HashMap<String, MockBehavior<StockInfo>>,
    history_rules: HashMap<String, MockBehavior<Vec<Bar>>>,
    news_rules: HashMap<String, MockBehavior<Vec<NewsItem>>>,
    search_behavior: Option<MockBehavior<Vec<SearchResult>>>,
    history_requests: Vec<(String, String)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `quote` calls for a specific symbol.
    pub async fn set_quote_behavior(&self, symbol: &str, behavior: MockBehavior<StockInfo>) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `history` calls for a specific symbol, whatever the timeframe.
    pub async fn set_history_behavior(&self, symbol: &str, behavior: MockBehavior<Vec<Bar>>) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `news` calls for a specific symbol.
    pub async fn set_news_behavior(&self, symbol: &str, behavior: MockBehavior<Vec<NewsItem>>) {
        let mut guard = self.state.lock().await;
        guard.news_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for every `search` call.
    pub async fn set_search_behavior(&self, behavior: MockBehavior<Vec<SearchResult>>) {
        let mut guard = self.state.lock().await;
        guard.search_behavior = Some(behavior);
    }

    /// Return a copy of the `(symbol, timeframe)` pairs passed to `history`, in call order.
    pub async fn get_history_requests(&self) -> Vec<(String, String)> {
        let guard = self.state.lock().await;
        guard.history_requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.clear();
        guard.history_rules.clear();
        guard.news_rules.clear();
        guard.search_behavior = None;
        guard.history_requests.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Inputs without a configured behavior fail with `DalalError::Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn DalalConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn DalalConnector>, controller)
    }
}

async fn play<T>(behavior: Option<MockBehavior<T>>, capability: &str) -> Result<T, DalalError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => {
            std::future::pending::<()>().await;
            unreachable!()
        }
        None => Err(DalalError::unsupported(capability)),
    }
}

impl DalalConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
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
impl QuoteProvider for DynamicMockConnector {
    async fn quote(&self, symbol: &str) -> Result<StockInfo, DalalError> {
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = {
            let guard = self.state.lock().await;
            guard.quote_rules.get(symbol).cloned()
        };
        play(behavior, "quote").await
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(&self, symbol: &str, timeframe: &str) -> Result<Vec<Bar>, DalalError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard
                .history_requests
                .push((symbol.to_string(), timeframe.to_string()));
            guard.history_rules.get(symbol).cloned()
        };
        play(behavior, "history").await
    }
}

#[async_trait]
impl SearchProvider for DynamicMockConnector {
    async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, DalalError> {
        let behavior = {
            let guard = self.state.lock().await;
            guard.search_behavior.clone()
        };
        play(behavior, "search").await
    }
}

#[async_trait]
impl NewsProvider for DynamicMockConnector {
    async fn news(&self, symbol: &str) -> Result<Vec<NewsItem>, DalalError> {
        let behavior = {
            let guard = self.state.lock().await;
            guard.news_rules.get(symbol).cloned()
        };
        play(behavior, "news").await
    }
}
