//! Formatting helpers for presenting metrics.
//!
//! Every helper accepts an `Option` so a missing payload field renders as
//! [`PLACEHOLDER`] instead of failing the slide.

/// Shown wherever a value is missing or not finite.
pub const PLACEHOLDER: &str = "—";

pub fn format_count(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => compact(v, ""),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_currency(value: Option<f64>, code: Option<&str>) -> String {
    let Some(v) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    let code = code.unwrap_or("USD");
    match currency_symbol(code) {
        Some(symbol) => compact(v, symbol),
        None => format!("{code} {}", compact(v, "")),
    }
}

/// `rate` is a ratio: `0.125` renders as `12.5%`.
pub fn format_percent(rate: Option<f64>) -> String {
    match finite(rate) {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => PLACEHOLDER.to_string(),
    }
}

/// Signed change, e.g. `+12.4%` or `−3.0%`.
pub fn format_change(ratio: Option<f64>) -> String {
    match finite(ratio) {
        Some(v) if v > 0.0 => format!("+{:.1}%", v * 100.0),
        Some(v) if v < 0.0 => format!("−{:.1}%", v.abs() * 100.0),
        Some(_) => "±0.0%".to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Relative change between two readings. `None` when either side is missing
/// or the previous reading is zero.
pub fn change_ratio(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    let current = finite(current)?;
    let previous = finite(previous)?;
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous.abs())
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn compact(value: f64, prefix: &str) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let body = if abs >= 1_000_000_000.0 {
        format!("{:.1}B", abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", abs / 1_000_000.0)
    } else if abs >= 10_000.0 {
        format!("{:.1}K", abs / 1_000.0)
    } else if abs.fract() == 0.0 {
        format!("{abs:.0}")
    } else {
        format!("{abs:.2}")
    };
    format!("{sign}{prefix}{body}")
}
