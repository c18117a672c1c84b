//! Plain-text rendering of snapshots, listings and comparisons.

use coinlens_analysis::{CoinComparison, IndicatorSnapshot, Sentiment, TrendLabel};
use coinlens_core::types::{CoinMarket, Currency, KeyMetrics};
use std::fmt::Write;

const NOT_AVAILABLE: &str = "N/A";

/// Format a number with thousands separators, e.g. `1234567.891` with two
/// decimals becomes `1,234,567.89`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format an amount in `currency`, or `N/A` when missing.
pub fn format_money(value: Option<f64>, currency: Currency, decimals: usize) -> String {
    match value {
        Some(v) => format!("{}{}", currency.symbol(), format_number(v, decimals)),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn format_plain(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format_number(v, decimals))
}

fn format_pct(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{:+.2}%", v))
}

/// Latest indicator readings and the recommendation.
pub fn render_snapshot(label: &str, snapshot: &IndicatorSnapshot, currency: Currency) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", label);
    let _ = writeln!(
        out,
        "Price:        {}",
        format_money(Some(snapshot.last_price), currency, 2)
    );
    let _ = writeln!(out, "Change (10):  {}", format_pct(snapshot.change_pct));

    let rsi_zone = snapshot
        .rsi_zone
        .map(|z| format!(" ({})", z))
        .unwrap_or_default();
    let _ = writeln!(out, "RSI:          {}{}", format_plain(snapshot.rsi, 2), rsi_zone);

    let bias = snapshot
        .macd_bias
        .map(|b| format!(" ({})", b))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "MACD:         {} / signal {}{}",
        format_plain(snapshot.macd, 4),
        format_plain(snapshot.macd_signal, 4),
        bias
    );
    let _ = writeln!(out, "SMA:          {}", format_money(snapshot.sma, currency, 2));
    let _ = writeln!(out, "EMA:          {}", format_money(snapshot.ema, currency, 2));
    let _ = writeln!(
        out,
        "Bollinger:    {} / {} / {}",
        format_money(snapshot.bollinger_lower, currency, 2),
        format_money(snapshot.bollinger_middle, currency, 2),
        format_money(snapshot.bollinger_upper, currency, 2)
    );

    let stoch_zone = snapshot
        .stochastic_zone
        .map(|z| format!(" ({})", z))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "Stochastic:   {}{}",
        format_plain(snapshot.stochastic_k, 2),
        stoch_zone
    );
    let _ = writeln!(
        out,
        "Recommendation: {}. {}",
        snapshot.recommendation.action, snapshot.recommendation.reason
    );
    out
}

/// Headline figures of a coin.
pub fn render_key_metrics(metrics: &KeyMetrics) -> String {
    let currency = metrics.currency;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", metrics.name, metrics.symbol);
    let _ = writeln!(out, "  Price:               {}", format_money(metrics.current_price, currency, 2));
    let _ = writeln!(out, "  Market cap:          {}", format_money(metrics.market_cap, currency, 0));
    let _ = writeln!(out, "  24h volume:          {}", format_money(metrics.total_volume, currency, 0));
    let _ = writeln!(out, "  24h change:          {}", format_pct(metrics.price_change_24h_pct));
    let _ = writeln!(out, "  Circulating supply:  {}", format_plain(metrics.circulating_supply, 0));
    let _ = writeln!(out, "  Total supply:        {}", format_plain(metrics.total_supply, 0));
    let _ = writeln!(out, "  Max supply:          {}", format_plain(metrics.max_supply, 0));
    let _ = writeln!(out, "  All-time high:       {}", format_money(metrics.all_time_high, currency, 2));
    let _ = writeln!(out, "  From ATH:            {}", format_pct(metrics.ath_change_pct));
    out
}

/// Market listing, one coin per row.
pub fn render_coin_list(coins: &[CoinMarket], currency: Currency) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<20} {:<7} {:>16} {:>22} {:>10}  {}",
        "Rank",
        "Name",
        "Symbol",
        format!("Price ({})", currency.code().to_uppercase()),
        "Market Cap",
        "24h",
        "Trend"
    );

    for coin in coins {
        let rank = coin
            .market_cap_rank
            .map_or_else(|| "-".to_string(), |r| r.to_string());
        let trend = coin
            .price_change_percentage_24h
            .map_or_else(|| NOT_AVAILABLE.to_string(), |c| TrendLabel::from_change(c).to_string());
        let _ = writeln!(
            out,
            "{:>4}  {:<20} {:<7} {:>16} {:>22} {:>10}  {}",
            rank,
            truncate(&coin.name, 20),
            coin.symbol.to_uppercase(),
            format_money(coin.current_price, currency, 2),
            format_money(coin.market_cap, currency, 0),
            format_pct(coin.price_change_percentage_24h),
            trend
        );
    }

    if coins.is_empty() {
        let _ = writeln!(out, "No coins match.");
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}

/// Two coins side by side.
pub fn render_comparison(comparison: &CoinComparison, currency: Currency) -> String {
    let first = &comparison.first;
    let second = &comparison.second;

    let mut out = String::new();
    out.push_str(&render_snapshot(&first.label, &first.snapshot, currency));
    out.push('\n');
    out.push_str(&render_snapshot(&second.label, &second.snapshot, currency));
    out.push('\n');

    let _ = writeln!(
        out,
        "Higher RSI:  {}",
        comparison.higher_rsi().unwrap_or("tie or unavailable")
    );
    let _ = writeln!(
        out,
        "Higher MACD: {}",
        comparison.higher_macd().unwrap_or("tie or unavailable")
    );
    if comparison.recommendations_agree() {
        let _ = writeln!(
            out,
            "Both suggest: {}",
            first.snapshot.recommendation.action
        );
    } else {
        let _ = writeln!(
            out,
            "Recommendations differ: {} says {}, {} says {}",
            first.label,
            first.snapshot.recommendation.action,
            second.label,
            second.snapshot.recommendation.action
        );
    }
    out
}

/// Per-headline sentiment plus the overall reading.
pub fn render_sentiment<S: AsRef<str>>(headlines: &[S]) -> String {
    let mut out = String::new();
    for headline in headlines {
        let headline = headline.as_ref();
        let sentiment = Sentiment::classify(headline).to_string();
        let _ = writeln!(out, "[{:<8}] {}", sentiment, headline);
    }
    let _ = writeln!(out, "Overall: {}", Sentiment::overall(headlines));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinlens_analysis::{IndicatorSettings, LabeledSnapshot};

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(-98765.4, 1), "-98,765.4");
        assert_eq!(format_number(0.15, 2), "0.15");
        assert_eq!(format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Some(64000.5), Currency::Usd, 2), "$64,000.50");
        assert_eq!(format_money(Some(1500.0), Currency::Inr, 0), "₹1,500");
        assert_eq!(format_money(None, Currency::Eur, 2), "N/A");
    }

    #[test]
    fn test_render_snapshot() {
        let prices: Vec<f64> = (1..=40).map(|i| i as f64).collect();
        let snapshot = IndicatorSnapshot::compute(&prices, &IndicatorSettings::default()).unwrap();
        let text = render_snapshot("BTC", &snapshot, Currency::Usd);

        assert!(text.starts_with("== BTC =="));
        assert!(text.contains("RSI:          100.00 (Overbought)"));
        assert!(text.contains("Recommendation: Sell."));
    }

    #[test]
    fn test_render_snapshot_short_series() {
        let snapshot =
            IndicatorSnapshot::compute(&[1.0, 2.0], &IndicatorSettings::default()).unwrap();
        let text = render_snapshot("X", &snapshot, Currency::Gbp);
        assert!(text.contains("RSI:          N/A\n"));
        assert!(text.contains("SMA:          N/A"));
    }

    #[test]
    fn test_render_coin_list() {
        let coins = vec![CoinMarket {
            id: "bitcoin".to_string(),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            current_price: Some(64000.0),
            market_cap: Some(1.25e12),
            market_cap_rank: Some(1),
            total_volume: None,
            price_change_percentage_24h: Some(2.0),
        }];
        let text = render_coin_list(&coins, Currency::Usd);
        assert!(text.contains("Price (USD)"));
        assert!(text.contains("BTC"));
        assert!(text.contains("$64,000.00"));
        assert!(text.contains("Increase"));

        assert!(render_coin_list(&[], Currency::Usd).contains("No coins match."));
    }

    #[test]
    fn test_render_comparison() {
        let settings = IndicatorSettings::default();
        let rising: Vec<f64> = (1..=40).map(|i| i as f64).collect();
        let falling: Vec<f64> = rising.iter().rev().copied().collect();
        let comparison = CoinComparison::new(
            LabeledSnapshot::new("UP", IndicatorSnapshot::compute(&rising, &settings).unwrap()),
            LabeledSnapshot::new("DOWN", IndicatorSnapshot::compute(&falling, &settings).unwrap()),
        );

        let text = render_comparison(&comparison, Currency::Usd);
        assert!(text.contains("Higher RSI:  UP"));
        assert!(text.contains("Recommendations differ"));
    }

    #[test]
    fn test_render_sentiment() {
        let text = render_sentiment(&["Bitcoin surges", "Exchange hack"]);
        assert!(text.contains("[positive] Bitcoin surges"));
        assert!(text.contains("[negative] Exchange hack"));
        assert!(text.ends_with("Overall: neutral\n"));
    }
}
