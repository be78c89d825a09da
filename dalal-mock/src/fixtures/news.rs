use chrono::{NaiveDate, TimeDelta};
use dalal_core::{NewsItem, round2};
use rand::Rng;

/// Headlines for `symbol`, dated back from `today`, newest first.
///
/// `company` is the display name used in the earnings summary; the symbol
/// stands in when it is unknown. The dividend amount is drawn from `rng`.
pub fn for_symbol<R: Rng + ?Sized>(
    symbol: &str,
    company: Option<&str>,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<NewsItem> {
    let company = company.unwrap_or(symbol);
    let dividend = round2(rng.random::<f64>() * 20.0);
    let dated = |days_ago: i64| (today - TimeDelta::days(days_ago)).format("%d %b %Y").to_string();

    vec![
        item(
            format!("{symbol} Reports Strong Q4 Earnings, Beats Expectations"),
            "Economic Times",
            dated(2),
            format!(
                "{company} announced quarterly results that exceeded analyst expectations with revenue growth of 15% year-over-year."
            ),
        ),
        item(
            format!("Analysts Upgrade {symbol} to 'Buy' Rating"),
            "Bloomberg",
            dated(5),
            "Multiple research firms have upgraded their outlook on the stock citing strong fundamentals and growth prospects.".to_string(),
        ),
        item(
            format!("{symbol} Announces New Product Launch"),
            "Business Standard",
            dated(8),
            "The company unveiled its latest innovation which is expected to open new revenue streams in emerging markets.".to_string(),
        ),
        item(
            format!("{symbol} CEO Discusses Future Growth Strategy"),
            "CNBC-TV18",
            dated(12),
            "In an exclusive interview, the CEO outlined plans for expansion and addressing competitive challenges in the industry.".to_string(),
        ),
        item(
            // Debug keeps the trailing `.0` on whole amounts.
            format!("{symbol} Declares Dividend of ₹{dividend:?} Per Share"),
            "Mint",
            dated(15),
            "The board of directors has approved a dividend payment to shareholders, reflecting strong cash flow position.".to_string(),
        ),
    ]
}

fn item(title: String, source: &str, date: String, summary: String) -> NewsItem {
    NewsItem {
        title,
        source: source.to_string(),
        date,
        summary,
        url: "#".to_string(),
    }
}
