//! Display-side money and percentage formatting. No conversion between
//! currencies happens here; the symbol is cosmetic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
            Currency::Jpy => "¥",
        }
    }

    /// Indian grouping: last three digits, then pairs (12,34,567)
    fn uses_lakh_grouping(&self) -> bool {
        matches!(self, Currency::Inr)
    }
}

/// Format a whole-unit amount with symbol and digit grouping
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if currency.uses_lakh_grouping() {
        group_lakh(&digits)
    } else {
        group_thousands(&digits)
    };
    format!("{}{}{}", sign, currency.symbol(), grouped)
}

/// Percentage with two decimals
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}%", value)
    } else {
        "0.00%".to_string()
    }
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

fn group_lakh(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_amount(0.0, Currency::Usd), "$0");
        assert_eq!(format_amount(999.0, Currency::Usd), "$999");
        assert_eq!(format_amount(1_000.0, Currency::Usd), "$1,000");
        assert_eq!(format_amount(1_234_567.4, Currency::Eur), "€1,234,567");
    }

    #[test]
    fn test_lakh_grouping() {
        assert_eq!(format_amount(1_234_567.0, Currency::Inr), "₹12,34,567");
        assert_eq!(format_amount(100_000.0, Currency::Inr), "₹1,00,000");
        assert_eq!(format_amount(12_345.0, Currency::Inr), "₹12,345");
        assert_eq!(format_amount(512.0, Currency::Inr), "₹512");
    }

    #[test]
    fn test_negative_and_non_finite() {
        assert_eq!(format_amount(-8_250.0, Currency::Gbp), "-£8,250");
        assert_eq!(format_amount(f64::NAN, Currency::Jpy), "¥0");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(12.3456), "12.35%");
        assert_eq!(format_percent(f64::INFINITY), "0.00%");
    }
}
