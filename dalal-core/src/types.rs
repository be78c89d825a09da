//! Re-export of foundational types from `dalal-types`.
// Consolidated re-exports so downstream crates can depend on `dalal-core` only

pub use dalal_types::{
    Bar, DalalError, LabelStyle, NewsItem, ResolutionMode, SamplingInterval, SearchResult,
    StockInfo, Timeframe, TimeframeSpec,
};
