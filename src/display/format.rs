//! Amount, percentage and date formatting
//!
//! Turns numbers into display strings only. Nothing here feeds back into
//! computation.

use chrono::NaiveDateTime;

use crate::models::Tone;

/// Currency layout, e.g. `R$ 1.234,56`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    pub symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
        }
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Format an amount as currency, rounded to cents
pub fn format_money(amount: f64, format: &MoneyFormat) -> String {
    if amount.is_nan() {
        return format!("{} NaN", format.symbol);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{} ∞", sign, format.symbol);
    }

    // Saturating float-to-int cast; beyond u128 range is not a real amount.
    let cents = (amount.abs() * 100.0).round() as u128;
    let units = group_digits(&(cents / 100).to_string(), &format.thousands_separator);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!(
        "{}{} {}{}{:02}",
        sign,
        format.symbol,
        units,
        format.decimal_separator,
        cents % 100
    )
}

/// Absent amounts display as zero
pub fn format_optional_money(amount: Option<f64>, format: &MoneyFormat) -> String {
    format_money(amount.unwrap_or(0.0), format)
}

/// Format a percentage ratio with one decimal place (`92.5%`)
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio)
}

/// Format a timestamp's date part with a strftime pattern
pub fn format_date(timestamp: &NaiveDateTime, pattern: &str) -> String {
    timestamp.format(pattern).to_string()
}

/// Wrap text in the ANSI colour for a tone
pub fn paint(text: &str, tone: Tone, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    let code = match tone {
        Tone::Success => "32",
        Tone::Warning => "33",
        Tone::Danger => "31",
    };
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

/// Tone for a balance: deficits are dangerous, everything else is fine
pub fn balance_tone(balance: f64) -> Tone {
    if balance < 0.0 {
        Tone::Danger
    } else {
        Tone::Success
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
