//! Currency formatting in the single fixed New Zealand dollar format
//!
//! `1234.5` renders as `$1,234.50 NZD`. Negative amounts keep the sign after
//! the symbol (`$-12.00 NZD`), and amounts that round to zero never show a sign.

/// Leading currency symbol
pub const CURRENCY_SYMBOL: &str = "$";

/// Trailing currency code
pub const CURRENCY_CODE: &str = "NZD";

/// Format an amount with thousands separators, two decimals, symbol and code
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{} {}", CURRENCY_SYMBOL, amount, CURRENCY_CODE);
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    format!(
        "{}{}{}.{} {}",
        CURRENCY_SYMBOL,
        if negative { "-" } else { "" },
        group_thousands(whole),
        cents,
        CURRENCY_CODE
    )
}

/// Parse a string produced by [`format_currency`] back into an amount
pub fn parse_currency(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix(CURRENCY_CODE).unwrap_or(trimmed).trim_end();
    let trimmed = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);
    let digits: String = trimmed.chars().filter(|&c| c != ',').collect();
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a percentage figure with one decimal place (`80.0%`)
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Render a user-entered rate without trailing zeros (`5.5%`, `7%`)
pub fn format_rate(value: f64) -> String {
    format!("{}%", trim_number(value))
}

/// Render a number the way it was most likely typed (`10`, `2.5`)
pub fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.4}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
