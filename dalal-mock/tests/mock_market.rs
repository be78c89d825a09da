use std::sync::Arc;

use chrono::NaiveDate;
use dalal_core::{DalalConnector, DalalError, FixedClock, PriceTable, ResolutionMode};
use dalal_mock::MockMarket;

fn clock() -> Arc<FixedClock> {
    let now = NaiveDate::from_ymd_opt(2025, 3, 5)
        .unwrap()
        .and_hms_opt(16, 0, 0)
        .unwrap();
    Arc::new(FixedClock(now))
}

fn seeded(seed: u64) -> MockMarket {
    MockMarket::builder().clock(clock()).seed(seed).build()
}

fn strict() -> MockMarket {
    MockMarket::builder()
        .clock(clock())
        .mode(ResolutionMode::Strict)
        .seed(1)
        .build()
}

#[tokio::test]
async fn known_quote_is_fixture() {
    let m = MockMarket::new();
    let qp = m.as_quote_provider().expect("quote provider");
    let q = qp.quote("RELIANCE").await.expect("quote");
    assert_eq!(q.name, "Reliance Industries Ltd.");
    assert!((q.current_price - 2550.75).abs() < f64::EPSILON);
    assert_eq!(q.volume, 7_865_432);
    assert_eq!(q.market_cap, "₹17.2T");
}

#[tokio::test]
async fn unknown_quote_is_randomized_in_range() {
    let m = seeded(3);
    let qp = m.as_quote_provider().expect("quote provider");
    for _ in 0..50 {
        let q = qp.quote("ZZZZ").await.expect("lenient quote");
        assert_eq!(q.name, "ZZZZ Stock");
        assert!((1500.0..=2500.0).contains(&q.current_price));
        assert!(q.change.abs() <= 25.0);
        assert!(q.change_percent.abs() <= 2.0);
        assert!((1_000_000..11_000_000).contains(&q.volume));
        assert!(q.market_cap.starts_with('₹') && q.market_cap.ends_with('T'));
        assert!((15.0..=40.0).contains(&q.pe));
        assert!((0.0..=4.0).contains(&q.dividend));
    }
}

#[tokio::test]
async fn strict_quote_rejects_unknown_symbol() {
    let m = strict();
    let qp = m.as_quote_provider().expect("quote provider");
    assert!(qp.quote("TCS").await.is_ok());
    let err = qp.quote("ZZZZ").await.expect_err("strict");
    assert_eq!(err, DalalError::unknown_symbol("ZZZZ"));
}

#[tokio::test]
async fn search_matches_symbol_or_name() {
    let m = MockMarket::new();
    let sp = m.as_search_provider().expect("search provider");

    let tata = sp.search("tata").await.expect("search");
    let syms: Vec<_> = tata.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(syms, ["TCS", "TATAMOTORS"]);

    let bank = sp.search("Bank").await.expect("search");
    let syms: Vec<_> = bank.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(syms, ["HDFCBANK", "SBIN", "ICICIBANK", "KOTAKBANK", "AXISBANK"]);
    assert!(bank.iter().all(|r| r.exchange == "NSE" && r.kind == "Equity"));

    assert!(sp.search("nothing-like-this").await.expect("search").is_empty());
}

#[tokio::test]
async fn empty_search_lists_first_ten() {
    let m = MockMarket::new();
    let sp = m.as_search_provider().expect("search provider");
    let all = sp.search("").await.expect("search");
    assert_eq!(all.len(), 10);
    assert_eq!(all[0].symbol, "RELIANCE");
    assert_eq!(all[9].symbol, "WIPRO");
}

#[tokio::test]
async fn news_is_dated_from_clock() {
    let m = seeded(5);
    let np = m.as_news_provider().expect("news provider");
    let items = np.news("INFY").await.expect("news");

    assert_eq!(items.len(), 5);
    let dates: Vec<_> = items.iter().map(|n| n.date.as_str()).collect();
    assert_eq!(
        dates,
        ["03 Mar 2025", "28 Feb 2025", "25 Feb 2025", "21 Feb 2025", "18 Feb 2025"]
    );
    assert!(items[0].title.starts_with("INFY Reports"));
    assert!(items[0].summary.starts_with("Infosys Ltd. announced"));
    assert!(items[4].title.contains("Declares Dividend of ₹"));
    assert!(items.iter().all(|n| n.url == "#"));
}

#[tokio::test]
async fn news_for_unknown_symbol_uses_symbol_as_company() {
    let m = seeded(5);
    let np = m.as_news_provider().expect("news provider");
    let items = np.news("ZZZZ").await.expect("lenient news");
    assert!(items[0].summary.starts_with("ZZZZ announced"));

    let s = strict();
    let np = s.as_news_provider().expect("news provider");
    let err = np.news("ZZZZ").await.expect_err("strict news");
    assert!(err.is_lookup_miss());
}

#[tokio::test]
async fn seeded_history_is_reproducible() {
    let a = seeded(42);
    let b = seeded(42);
    let ha = a.as_history_provider().expect("history provider");
    let hb = b.as_history_provider().expect("history provider");

    let sa = ha.history("TCS", "1mo").await.expect("history");
    let sb = hb.history("TCS", "1mo").await.expect("history");
    assert!(!sa.is_empty());
    assert_eq!(sa, sb);

    // The shared RNG advances between calls.
    let again = ha.history("TCS", "1mo").await.expect("history");
    assert_ne!(sa, again);
}

#[tokio::test]
async fn lenient_history_falls_back_and_strict_rejects() {
    let lenient = seeded(7);
    let hp = lenient.as_history_provider().expect("history provider");
    let bars = hp.history("RELIANCE", "bogus").await.expect("lenient");
    assert_eq!(bars.len(), 23);

    let s = strict();
    let hp = s.as_history_provider().expect("history provider");
    let err = hp.history("RELIANCE", "bogus").await.expect_err("strict");
    assert_eq!(err, DalalError::unknown_timeframe("bogus"));
    let err = hp.history("ZZZZ", "1mo").await.expect_err("strict");
    assert_eq!(err, DalalError::unknown_symbol("ZZZZ"));
    assert_eq!(s.mode(), ResolutionMode::Strict);
}

#[test]
fn reference_prices_cover_fixtures() {
    let prices = MockMarket::reference_prices();
    assert_eq!(prices.reference_price("RELIANCE"), Some(2550.75));
    assert_eq!(prices.reference_price("SBIN"), Some(527.80));
    assert!(!prices.contains("WIPRO"));
}

#[tokio::test]
async fn strict_symbol_knowledge_follows_the_price_table() {
    let m = MockMarket::builder()
        .clock(clock())
        .mode(ResolutionMode::Strict)
        .prices(PriceTable::new([("ACME", 100.0)]))
        .seed(5)
        .build();
    let hp = m.as_history_provider().expect("history provider");
    let qp = m.as_quote_provider().expect("quote provider");
    let np = m.as_news_provider().expect("news provider");

    let bars = hp.history("ACME", "1mo").await.expect("table symbol history");
    assert_eq!(bars.len(), 23);
    let q = qp.quote("ACME").await.expect("table symbol quote");
    assert_eq!(q.name, "ACME Stock");
    assert!((q.current_price - 100.0).abs() < f64::EPSILON);
    assert_eq!(np.news("ACME").await.expect("table symbol news").len(), 5);

    let unknown = DalalError::unknown_symbol("TCS");
    assert_eq!(hp.history("TCS", "1mo").await.unwrap_err(), unknown);
    assert_eq!(qp.quote("TCS").await.unwrap_err(), unknown);
    assert_eq!(np.news("TCS").await.unwrap_err(), unknown);
}
