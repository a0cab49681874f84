//! FILENAME: records/src/money.rs
//! PURPOSE: Currency formatting in the fixed bn-BD convention.
//! CONTEXT: Every taka amount shown in list rows, summary cards, and
//! printable documents goes through `format_money`. The convention is
//! the Bangladeshi one: `৳ ` prefix, Bengali numerals, and the Indian
//! digit-grouping system (last three digits, then pairs). Table
//! renderers and the document exporter must call the same function so
//! their output is byte-identical.

/// The taka currency glyph used by every formatted amount.
pub const CURRENCY_SYMBOL: &str = "৳";

/// Format an amount as `৳ ১২,৩৪,৫৬৭`.
///
/// Integers render with no decimal point; fractional amounts keep their
/// decimal part after the grouped integer digits. Negative amounts put
/// the minus sign between the glyph and the digits.
pub fn format_money(amount: f64) -> String {
    let plain = crate::field::format_plain_number(amount.abs());
    let grouped = group_digits(&plain);
    let localized = to_bengali_digits(&grouped);

    if amount < 0.0 {
        format!("{} -{}", CURRENCY_SYMBOL, localized)
    } else {
        format!("{} {}", CURRENCY_SYMBOL, localized)
    }
}

/// Format an optional amount; `None` renders as `৳ ০`.
pub fn format_money_opt(amount: Option<f64>) -> String {
    format_money(amount.unwrap_or(0.0))
}

/// Insert grouping separators in the Indian system: the last three
/// integer digits form one group, every group above that has two.
fn group_digits(s: &str) -> String {
    let parts: Vec<&str> = s.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    let mut result = String::new();
    for (i, c) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && remaining >= 3 && (remaining - 3) % 2 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}

/// Map ASCII digits to Bengali numerals (U+09E6..U+09EF).
fn to_bengali_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '0'..='9' => {
                let offset = c as u32 - '0' as u32;
                char::from_u32(0x09E6 + offset).unwrap_or(c)
            }
            other => other,
        })
        .collect()
}
