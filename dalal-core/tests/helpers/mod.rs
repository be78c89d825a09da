#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use dalal_core::{PriceTable, SeriesGenerator, TimeframeTable};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub fn nse_prices() -> PriceTable {
    PriceTable::new([
        ("RELIANCE", 2550.75),
        ("TCS", 3450.20),
        ("INFY", 1456.10),
        ("HDFCBANK", 1623.50),
        ("SBIN", 527.80),
    ])
}

pub fn generator() -> SeriesGenerator {
    SeriesGenerator::new(TimeframeTable::default(), nse_prices())
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
