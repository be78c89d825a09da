use chrono::NaiveDate;
use dalal_types::{Bar, DalalError, ResolutionMode, SearchResult, StockInfo, Timeframe};

#[test]
fn bar_serializes_with_ui_field_names() {
    let bar = Bar {
        label: "07 Mar".to_string(),
        price: 2551.2,
        open: 2540.05,
        high: 2560.0,
        low: 2538.1,
        close: 2551.2,
        volume: 4_200_000,
        ts: NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    };

    let v = serde_json::to_value(&bar).expect("serialize bar");
    let obj = v.as_object().expect("object");
    assert_eq!(obj["date"], "07 Mar");
    assert_eq!(obj["price"], obj["close"]);
    assert_eq!(obj["volume"], 4_200_000);
    assert!(!obj.contains_key("ts"), "sample timestamp stays internal");
    assert!(!obj.contains_key("label"));
    assert!(bar.is_coherent());
}

#[test]
fn stock_info_uses_camel_case() {
    let info = StockInfo {
        name: "Infosys Ltd.".to_string(),
        current_price: 1456.10,
        change: -3.45,
        change_percent: -0.24,
        open: 1459.55,
        high: 1467.20,
        low: 1451.85,
        volume: 3_210_987,
        market_cap: "₹6.1T".to_string(),
        pe: 24.6,
        dividend: 2.8,
    };
    let json = serde_json::to_string(&info).expect("serialize info");
    assert!(json.contains("\"currentPrice\":1456.1"));
    assert!(json.contains("\"changePercent\":-0.24"));
    assert!(json.contains("\"marketCap\":\"₹6.1T\""));

    let de: StockInfo = serde_json::from_str(&json).expect("deserialize info");
    assert_eq!(de, info);
}

#[test]
fn search_result_kind_is_renamed_to_type() {
    let row = SearchResult {
        symbol: "SBIN".to_string(),
        name: "State Bank of India".to_string(),
        exchange: "NSE".to_string(),
        kind: "Equity".to_string(),
    };
    let v = serde_json::to_value(&row).expect("serialize row");
    assert_eq!(v["type"], "Equity");
}

#[test]
fn timeframe_codes_parse_and_reject() {
    for tf in Timeframe::ALL {
        assert_eq!(tf.code().parse::<Timeframe>().unwrap(), tf);
    }
    let err = "bogus".parse::<Timeframe>().unwrap_err();
    assert_eq!(err, DalalError::unknown_timeframe("bogus"));
    assert!(err.is_lookup_miss());
    assert_eq!(Timeframe::default(), Timeframe::OneMonth);

    let de: Result<Timeframe, _> = serde_json::from_str("\"2w\"");
    assert!(de.is_err());
    let de: Timeframe = serde_json::from_str("\"5y\"").expect("deserialize 5y");
    assert_eq!(de, Timeframe::FiveYears);
}

#[test]
fn resolution_mode_serde() {
    let m: ResolutionMode = serde_json::from_str("\"strict\"").expect("deserialize mode");
    assert_eq!(m, ResolutionMode::Strict);
    assert!(!m.substitutes());
    assert!(ResolutionMode::default().substitutes());
}
