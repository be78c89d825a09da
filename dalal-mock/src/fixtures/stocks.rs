use dalal_core::{PriceTable, StockInfo, round2};
use rand::Rng;

// symbol, name, price, change, change%, open, high, low, volume, mcap, pe, dividend
type StockRow = (
    &'static str,
    &'static str,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    u64,
    &'static str,
    f64,
    f64,
);

const STOCKS: &[StockRow] = &[
    (
        "RELIANCE",
        "Reliance Industries Ltd.",
        2550.75,
        45.25,
        1.8,
        2505.50,
        2570.25,
        2490.00,
        7_865_432,
        "₹17.2T",
        28.4,
        2.5,
    ),
    (
        "TCS",
        "Tata Consultancy Services Ltd.",
        3450.20,
        -12.35,
        -0.36,
        3462.55,
        3478.90,
        3442.10,
        2_345_678,
        "₹12.6T",
        32.1,
        3.2,
    ),
    (
        "INFY",
        "Infosys Ltd.",
        1456.10,
        -3.45,
        -0.24,
        1459.55,
        1467.20,
        1451.85,
        3_210_987,
        "₹6.1T",
        24.6,
        2.8,
    ),
    (
        "HDFCBANK",
        "HDFC Bank Ltd.",
        1623.50,
        12.75,
        0.79,
        1610.75,
        1625.90,
        1608.25,
        4_532_109,
        "₹9.3T",
        22.8,
        1.8,
    ),
    (
        "SBIN",
        "State Bank of India",
        527.80,
        3.25,
        0.62,
        524.55,
        530.10,
        523.45,
        9_876_543,
        "₹4.7T",
        9.7,
        3.5,
    ),
];

pub fn by_symbol(s: &str) -> Option<StockInfo> {
    STOCKS.iter().find(|row| row.0 == s).map(info)
}

pub fn name_of(s: &str) -> Option<&'static str> {
    STOCKS.iter().find(|row| row.0 == s).map(|row| row.1)
}

pub fn price_table() -> PriceTable {
    PriceTable::new(STOCKS.iter().map(|row| (row.0, row.2)))
}

/// Plausible quote for a symbol without a fixture.
pub fn random_info<R: Rng + ?Sized>(s: &str, rng: &mut R) -> StockInfo {
    let mut u = || rng.random::<f64>();
    StockInfo {
        name: format!("{s} Stock"),
        current_price: round2(1500.0 + u() * 1000.0),
        change: round2((u() - 0.5) * 50.0),
        change_percent: round2((u() - 0.5) * 4.0),
        open: round2(1500.0 + u() * 1000.0),
        high: round2(1550.0 + u() * 1000.0),
        low: round2(1450.0 + u() * 1000.0),
        volume: whole(1_000_000.0 + u() * 10_000_000.0),
        // Debug keeps the trailing `.0` on whole values (₹3.0T).
        market_cap: format!("₹{:?}T", round1(u() * 10.0)),
        pe: round2(15.0 + u() * 25.0),
        dividend: round2(u() * 4.0),
    }
}

fn info(row: &StockRow) -> StockInfo {
    let &(_, name, price, change, change_percent, open, high, low, volume, mcap, pe, dividend) =
        row;
    StockInfo {
        name: name.to_string(),
        current_price: price,
        change,
        change_percent,
        open,
        high,
        low,
        volume,
        market_cap: mcap.to_string(),
        pe,
        dividend,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(x: f64) -> u64 {
    x as u64
}
