//! dalal-core
//!
//! Core traits, reference tables and the synthetic series generator shared
//! across the dalal crates.
//!
//! - `types`: re-exported data transfer objects from `dalal-types`.
//! - `connector`: the `DalalConnector` trait and capability provider traits.
//! - `clock`: wall-clock sources (`SystemClock`, `FixedClock`).
//! - `tables`: immutable timeframe and reference-price tables.
//! - `series`: calendar sampling, the bounded random walk and `SeriesGenerator`.
//!
//! Nothing in this crate touches global state: tables, clock and RNG are all
//! handed in by the caller, so tests can pin every source of variation.
#![warn(missing_docs)]

/// Wall-clock sources used for sampling and dating.
pub mod clock;
/// Connector capability traits and the primary `DalalConnector` interface.
pub mod connector;
/// Synthetic historical series generation.
pub mod series;
/// Immutable lookup tables.
pub mod tables;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use connector::DalalConnector;
pub use series::calendar::{in_session, is_weekday, trading_timestamps};
pub use series::walk::{PRICE_FLOOR, round2};
pub use series::{SeriesGenerator, random_base_price, series_from};
pub use tables::{PriceTable, TimeframeTable};
pub use types::*;
