//! Bounded multiplicative random walk and OHLCV derivation.

use chrono::NaiveDateTime;
use rand::Rng;

use dalal_types::{Bar, TimeframeSpec};

/// Hard lower bound applied to the running price after every step.
///
/// This is a clamp, not a failure: a walk that trends to zero flattens out at
/// one currency unit instead of going non-positive.
pub const PRICE_FLOOR: f64 = 1.0;

const OPEN_SPREAD: f64 = 0.5;
const WICK_SPREAD: f64 = 0.2;
const VOLUME_BASE_MIN: f64 = 1_000_000.0;
const VOLUME_BASE_RANGE: f64 = 9_000_000.0;
const VOLUME_SENSITIVITY: f64 = 10.0;

/// Walk forward from `base_price`, emitting one bar per timestamp.
///
/// Per bar the RNG is drawn five times, in this order: step, open offset,
/// high wick, low wick, base volume.
pub fn walk<R: Rng + ?Sized>(
    base_price: f64,
    spec: &TimeframeSpec,
    timestamps: &[NaiveDateTime],
    rng: &mut R,
) -> Vec<Bar> {
    let vol = spec.volatility;
    let pattern = spec.label.pattern();
    let mut current = base_price;
    let mut bars = Vec::with_capacity(timestamps.len());

    for &ts in timestamps {
        let delta = (rng.random::<f64>() - 0.5) * vol * current;
        current = (current + delta).max(PRICE_FLOOR);

        let open = current - rng.random::<f64>() * vol * current * OPEN_SPREAD;
        let close = current;
        let high = open.max(close) + rng.random::<f64>() * vol * current * WICK_SPREAD;
        let low = open.min(close) - rng.random::<f64>() * vol * current * WICK_SPREAD;

        let volume_base = VOLUME_BASE_MIN + rng.random::<f64>() * VOLUME_BASE_RANGE;
        let multiplier = 1.0 + (delta / current).abs() * VOLUME_SENSITIVITY;

        let close = round2(close);
        bars.push(Bar {
            label: ts.format(pattern).to_string(),
            price: close,
            open: round2(open),
            high: round2(high),
            low: round2(low),
            close,
            volume: to_volume(volume_base * multiplier),
            ts,
        });
    }
    bars
}

/// Round to two decimal places.
#[must_use]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_volume(v: f64) -> u64 {
    // Saturating float-to-int cast floors positive values.
    v as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dalal_types::{Timeframe, TimeframeSpec};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn round2_keeps_two_decimals() {
        assert!((round2(2550.754_9) - 2550.75).abs() < 1e-9);
        assert!((round2(1.005_1) - 1.01).abs() < 1e-9);
        assert!((round2(3.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn floor_holds_under_extreme_volatility() {
        let mut spec = TimeframeSpec::for_timeframe(Timeframe::OneYear);
        spec.volatility = 1.9;
        let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let ts: Vec<_> = (0..500)
            .map(|i| day.and_hms_opt(10, 0, 0).unwrap() + chrono::TimeDelta::days(i))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);
        let bars = walk(2.0, &spec, &ts, &mut rng);
        assert_eq!(bars.len(), ts.len());
        assert!(bars.iter().all(|b| b.close >= PRICE_FLOOR));
    }
}
