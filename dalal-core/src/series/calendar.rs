//! Sampling of the requested span and trading-calendar filtering.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike, Weekday};

use dalal_types::{SamplingInterval, TimeframeSpec};

/// First minute of the simulated trading session, as `(hour, minute)`.
pub const SESSION_OPEN: (u32, u32) = (9, 15);
/// Last minute of the simulated trading session, as `(hour, minute)`.
pub const SESSION_CLOSE: (u32, u32) = (15, 30);

/// Weekly samples land on the last trading day of the week.
const WEEK_ANCHOR: Weekday = Weekday::Fri;

/// True for Monday through Friday.
#[must_use]
pub fn is_weekday(ts: NaiveDateTime) -> bool {
    ts.weekday().number_from_monday() <= 5
}

/// True if the hour and minute of `ts` lie within 09:15–15:30, both ends inclusive.
///
/// Seconds are ignored, so 15:30:59 is still in session.
#[must_use]
pub fn in_session(ts: NaiveDateTime) -> bool {
    let hm = (ts.hour(), ts.minute());
    (SESSION_OPEN..=SESSION_CLOSE).contains(&hm)
}

/// Whether a sample survives the trading-calendar filter for `interval`.
#[must_use]
pub fn is_trading_sample(interval: SamplingInterval, ts: NaiveDateTime) -> bool {
    if interval.is_intraday() {
        is_weekday(ts) && in_session(ts)
    } else {
        is_weekday(ts)
    }
}

/// Every timestamp from `now - span` to `now` (inclusive) spaced by the interval step.
///
/// Sub-daily and daily grids start exactly at `now - span`. The weekly grid
/// starts on the first Friday at or after `now - span`, keeping the time of day.
#[must_use]
pub fn sample_range(now: NaiveDateTime, spec: &TimeframeSpec) -> Vec<NaiveDateTime> {
    let mut cursor = now - spec.span();
    if spec.interval == SamplingInterval::Weekly {
        cursor += days_until(cursor.weekday(), WEEK_ANCHOR);
    }

    let step = spec.interval.step();
    let mut out = Vec::new();
    while cursor <= now {
        out.push(cursor);
        cursor += step;
    }
    out
}

/// Sampled timestamps that fall on trading days (and, intraday, inside the session).
#[must_use]
pub fn trading_timestamps(now: NaiveDateTime, spec: &TimeframeSpec) -> Vec<NaiveDateTime> {
    let mut samples = sample_range(now, spec);
    samples.retain(|&ts| is_trading_sample(spec.interval, ts));
    samples
}

fn days_until(from: Weekday, to: Weekday) -> TimeDelta {
    let from = i64::from(from.num_days_from_monday());
    let to = i64::from(to.num_days_from_monday());
    TimeDelta::days((to - from).rem_euclid(7))
}
