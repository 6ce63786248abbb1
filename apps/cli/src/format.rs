//! # Currency Formatting
//!
//! Turns the raw numbers from `wesplit-core` into display text.
//!
//! ```text
//! 1234.5  + USD  ──►  "$1,234.50"
//! 1234.4  + JPY  ──►  "¥1,234"
//! 12      + CHF  ──►  "CHF 12.00"
//! ```
//!
//! Only the symbol and the number of fraction digits depend on the
//! currency. Grouping always uses `,` and the decimal point `.`.

use wesplit_core::CurrencyCode;

/// Currencies displayed with a symbol instead of their code.
const SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("CAD", "CA$"),
    ("AUD", "A$"),
    ("NZD", "NZ$"),
    ("MXN", "MX$"),
    ("BRL", "R$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "CN¥"),
    ("KRW", "₩"),
    ("INR", "₹"),
    ("PKR", "Rs"),
];

/// Currencies without minor units.
const ZERO_DECIMAL: &[&str] = &["JPY", "KRW"];

/// Number of fraction digits shown for a currency.
pub fn fraction_digits(code: &CurrencyCode) -> usize {
    if ZERO_DECIMAL.contains(&code.as_str()) {
        0
    } else {
        2
    }
}

/// Formats an amount for display.
///
/// Non-finite values come out as the code followed by `NaN` / `inf`, so a
/// bad calculation is visible rather than disguised as a price.
pub fn format_currency(value: f64, code: &CurrencyCode) -> String {
    if !value.is_finite() {
        return format!("{} {}", code, value);
    }

    let digits = fraction_digits(code);
    let rounded = format!("{:.*}", digits, value.abs());
    let (whole, fraction) = match rounded.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (rounded.as_str(), None),
    };

    let mut number = group_thousands(whole);
    if let Some(fraction) = fraction {
        number.push('.');
        number.push_str(fraction);
    }

    // "-0.00" reads oddly; only show a sign when the rounded value is non-zero
    let negative = value < 0.0 && rounded.chars().any(|c| matches!(c, '1'..='9'));
    let sign = if negative { "-" } else { "" };

    match SYMBOLS.iter().find(|(c, _)| *c == code.as_str()) {
        Some((_, symbol)) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{} {}", sign, code, number),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn code(c: &str) -> CurrencyCode {
        CurrencyCode::new(c).unwrap()
    }

    #[test]
    fn test_symbol_currencies() {
        assert_eq!(format_currency(30.0, &code("USD")), "$30.00");
        assert_eq!(format_currency(1234.5, &code("USD")), "$1,234.50");
        assert_eq!(format_currency(0.0, &code("EUR")), "€0.00");
        assert_eq!(format_currency(19.99, &code("GBP")), "£19.99");
        assert_eq!(format_currency(1500.0, &code("PKR")), "Rs1,500.00");
    }

    #[test]
    fn test_zero_decimal_currencies() {
        assert_eq!(fraction_digits(&code("JPY")), 0);
        assert_eq!(format_currency(1234.4, &code("JPY")), "¥1,234");
        assert_eq!(format_currency(1_000_000.0, &code("KRW")), "₩1,000,000");
    }

    #[test]
    fn test_code_prefixed_currencies() {
        assert_eq!(format_currency(12.0, &code("CHF")), "CHF 12.00");
        assert_eq!(format_currency(-5.5, &code("SEK")), "-SEK 5.50");
    }

    #[test]
    fn test_sign_handling() {
        assert_eq!(format_currency(-5.0, &code("USD")), "-$5.00");
        assert_eq!(format_currency(-0.001, &code("USD")), "$0.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::NAN, &code("USD")), "USD NaN");
        assert_eq!(format_currency(f64::INFINITY, &code("EUR")), "EUR inf");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
