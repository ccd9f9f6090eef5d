//! Display formatting for projection values
//!
//! Presentation only; the engine never calls into this module. Non-finite
//! values are printed as-is so a bad input stays visible.

/// Whole-dollar currency with thousands separators, e.g. `$157,500` or `-$1,025`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Per-share price with cents, e.g. `$11,510.08`
pub fn format_share_price(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }
    let text = format!("{:.2}", value.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if value < 0.0 && text != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

/// Company valuation in billions or millions, e.g. `$31.00B`, `$850M`
pub fn format_valuation(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }
    let magnitude = value.abs();
    let text = if magnitude >= 1e9 {
        format!("{:.2}B", magnitude / 1e9)
    } else {
        format!("{:.0}M", magnitude / 1e6)
    };
    let sign = if value < 0.0 && text != "0M" { "-" } else { "" };
    format!("{}${}", sign, text)
}

/// Unit count with thousands separators, e.g. `20,000`
pub fn format_units(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let text = format!("{:.0}", value.abs());
    let sign = if value < 0.0 && text != "0" { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&text))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
