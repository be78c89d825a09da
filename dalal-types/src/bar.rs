use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One OHLCV record for a single sampled time slot.
///
/// Serialized with the field names the chart UI reads (`date`, `price`, ...).
/// `price` and `close` always hold the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Display label of the sample timestamp; format depends on the timeframe.
    #[serde(rename = "date")]
    pub label: String,
    /// Closing price, repeated for charting convenience.
    pub price: f64,
    /// Opening price.
    pub open: f64,
    /// Highest traded price in the slot.
    pub high: f64,
    /// Lowest traded price in the slot.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: u64,
    /// Wall-clock time of the sample in the market's timezone.
    #[serde(skip)]
    pub ts: NaiveDateTime,
}

impl Bar {
    /// True when `low <= min(open, close)`, `high >= max(open, close)` and the close is positive.
    #[must_use]
    pub fn is_coherent(&self) -> bool {
        self.low <= self.open.min(self.close)
            && self.high >= self.open.max(self.close)
            && self.close > 0.0
    }
}
