//! Dalal data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod bar;
mod config;
mod error;
mod market;
mod timeframe;

pub use bar::Bar;
pub use config::ResolutionMode;
pub use error::DalalError;
pub use market::{NewsItem, SearchResult, StockInfo};
pub use timeframe::{LabelStyle, SamplingInterval, Timeframe, TimeframeSpec};
