//! Timeframe codes and the parameters that drive series generation.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::DalalError;

/// A historical-series timeframe as requested by the UI (`?timeframe=1mo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timeframe {
    /// One trading day of 5-minute bars.
    OneDay,
    /// One calendar week of 15-minute bars.
    OneWeek,
    /// 30 calendar days of daily bars.
    #[default]
    OneMonth,
    /// 90 calendar days of daily bars.
    ThreeMonths,
    /// 180 calendar days of daily bars.
    SixMonths,
    /// 365 calendar days of daily bars.
    OneYear,
    /// Five years of weekly bars.
    FiveYears,
}

impl Timeframe {
    /// Every recognized timeframe, shortest first.
    pub const ALL: [Self; 7] = [
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::FiveYears,
    ];

    /// The short wire code for this timeframe.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::FiveYears => "5y",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Timeframe {
    type Err = DalalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tf| tf.code() == s)
            .ok_or_else(|| DalalError::unknown_timeframe(s))
    }
}

impl TryFrom<String> for Timeframe {
    type Error = DalalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self {
        tf.code().to_string()
    }
}

/// Spacing between sampled timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingInterval {
    /// Every 5 minutes.
    FiveMinutes,
    /// Every 15 minutes.
    FifteenMinutes,
    /// Every calendar day.
    Daily,
    /// Every calendar week, anchored on Fridays.
    Weekly,
}

impl SamplingInterval {
    /// Distance between two consecutive samples.
    #[must_use]
    pub const fn step(self) -> TimeDelta {
        match self {
            Self::FiveMinutes => TimeDelta::minutes(5),
            Self::FifteenMinutes => TimeDelta::minutes(15),
            Self::Daily => TimeDelta::days(1),
            Self::Weekly => TimeDelta::weeks(1),
        }
    }

    /// Sub-daily intervals are restricted to the trading session window.
    #[must_use]
    pub const fn is_intraday(self) -> bool {
        matches!(self, Self::FiveMinutes | Self::FifteenMinutes)
    }
}

/// How a bar's timestamp is rendered into its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// 12-hour clock time, e.g. `09:20 AM`.
    ClockTime,
    /// Weekday abbreviation plus clock time, e.g. `Mon, 02:45 PM`.
    WeekdayClockTime,
    /// Day of month and month abbreviation, e.g. `07 Mar`.
    DayMonth,
}

impl LabelStyle {
    /// `strftime` pattern for this style.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::ClockTime => "%I:%M %p",
            Self::WeekdayClockTime => "%a, %I:%M %p",
            Self::DayMonth => "%d %b",
        }
    }
}

/// Generation parameters for a single timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeframeSpec {
    /// Total calendar days covered, counted back from "now".
    pub span_days: u32,
    /// Sampling granularity.
    pub interval: SamplingInterval,
    /// Per-step maximum relative price swing (0.02 = 2%).
    pub volatility: f64,
    /// Label format for the generated bars.
    pub label: LabelStyle,
}

impl TimeframeSpec {
    /// Parameters of the stock service for each recognized timeframe.
    #[must_use]
    pub const fn for_timeframe(tf: Timeframe) -> Self {
        let (span_days, interval, volatility, label) = match tf {
            Timeframe::OneDay => (1, SamplingInterval::FiveMinutes, 0.01, LabelStyle::ClockTime),
            Timeframe::OneWeek => (
                7,
                SamplingInterval::FifteenMinutes,
                0.015,
                LabelStyle::WeekdayClockTime,
            ),
            Timeframe::OneMonth => (30, SamplingInterval::Daily, 0.02, LabelStyle::DayMonth),
            Timeframe::ThreeMonths => (90, SamplingInterval::Daily, 0.03, LabelStyle::DayMonth),
            Timeframe::SixMonths => (180, SamplingInterval::Daily, 0.04, LabelStyle::DayMonth),
            Timeframe::OneYear => (365, SamplingInterval::Daily, 0.06, LabelStyle::DayMonth),
            Timeframe::FiveYears => (365 * 5, SamplingInterval::Weekly, 0.08, LabelStyle::DayMonth),
        };
        Self {
            span_days,
            interval,
            volatility,
            label,
        }
    }

    /// Calendar span as a duration.
    #[must_use]
    pub fn span(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.span_days))
    }
}
