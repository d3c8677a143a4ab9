//! Number formatting for display
//!
//! Mirrors en-US `toLocaleString`: thousands separators, at most three
//! fraction digits, no trailing zeros.

use rust_decimal::{Decimal, RoundingStrategy};

const MAX_FRACTION_DIGITS: u32 = 3;

/// `1234567.5` -> `1,234,567.5`
pub fn amount(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + whole.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// `-1500` -> `-$1,500`
pub fn currency(value: Decimal) -> String {
    let formatted = amount(value);
    match formatted.strip_prefix('-') {
        Some(magnitude) => format!("-${magnitude}"),
        None => format!("${formatted}"),
    }
}

/// `4.20` -> `4.2%`
pub fn percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

/// Plain decimal without trailing zeros: `14.0` -> `14`
pub fn plain(value: Decimal) -> String {
    value.normalize().to_string()
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
