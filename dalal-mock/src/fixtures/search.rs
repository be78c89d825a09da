use dalal_core::SearchResult;

const CATALOG: &[(&str, &str)] = &[
    ("RELIANCE", "Reliance Industries Ltd."),
    ("TCS", "Tata Consultancy Services Ltd."),
    ("HDFCBANK", "HDFC Bank Ltd."),
    ("INFY", "Infosys Ltd."),
    ("SBIN", "State Bank of India"),
    ("BHARTIARTL", "Bharti Airtel Ltd."),
    ("HINDUNILVR", "Hindustan Unilever Ltd."),
    ("ICICIBANK", "ICICI Bank Ltd."),
    ("KOTAKBANK", "Kotak Mahindra Bank Ltd."),
    ("WIPRO", "Wipro Ltd."),
    ("ADANIENT", "Adani Enterprises Ltd."),
    ("TATAMOTORS", "Tata Motors Ltd."),
    ("BAJFINANCE", "Bajaj Finance Ltd."),
    ("AXISBANK", "Axis Bank Ltd."),
    ("SUNPHARMA", "Sun Pharmaceutical Industries Ltd."),
];

/// Entries returned for an empty query.
const DEFAULT_LISTING: usize = 10;

/// Case-insensitive substring match on symbol or company name.
pub fn search(query: &str) -> Vec<SearchResult> {
    let upper = query.to_uppercase();
    if upper.is_empty() {
        return CATALOG.iter().take(DEFAULT_LISTING).map(row).collect();
    }
    let lower = upper.to_lowercase();
    CATALOG
        .iter()
        .filter(|(sym, name)| sym.contains(&upper) || name.to_lowercase().contains(&lower))
        .map(row)
        .collect()
}

fn row(&(symbol, name): &(&str, &str)) -> SearchResult {
    SearchResult {
        symbol: symbol.to_string(),
        name: name.to_string(),
        exchange: "NSE".to_string(),
        kind: "Equity".to_string(),
    }
}
