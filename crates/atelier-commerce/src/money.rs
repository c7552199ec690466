//! Reference-currency amounts at the display and payment boundaries.
//!
//! The whole domain computes in reference EUR. Amounts leave it in exactly
//! two shapes: integer minor units for the payment collaborator, and
//! display strings converted into a locale's currency via a static
//! exchange-rate table. Neither conversion feeds back into pricing.

use atelier_pricing::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Convert a reference-EUR amount to integer minor units (cents), the
/// shape the payment collaborator expects.
pub fn eur_to_minor_units(amount_eur: f64) -> i64 {
    (amount_eur * 100.0).round() as i64
}

/// A locale-facing display currency with a fixed EUR exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DisplayCurrency {
    #[default]
    EUR,
    RSD,
    ALL,
    BAM,
    MKD,
    TRY,
}

impl DisplayCurrency {
    /// Currency code (e.g. "RSD").
    pub fn code(&self) -> &'static str {
        match self {
            DisplayCurrency::EUR => "EUR",
            DisplayCurrency::RSD => "RSD",
            DisplayCurrency::ALL => "ALL",
            DisplayCurrency::BAM => "BAM",
            DisplayCurrency::MKD => "MKD",
            DisplayCurrency::TRY => "TRY",
        }
    }

    /// Display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayCurrency::EUR => "\u{20ac}",
            DisplayCurrency::RSD => "RSD",
            DisplayCurrency::ALL => "L",
            DisplayCurrency::BAM => "KM",
            DisplayCurrency::MKD => "\u{434}\u{435}\u{43d}",
            DisplayCurrency::TRY => "\u{20ba}",
        }
    }

    /// Units of this currency per EUR.
    pub fn eur_rate(&self) -> f64 {
        match self {
            DisplayCurrency::EUR => 1.0,
            DisplayCurrency::RSD => 117.2,
            DisplayCurrency::ALL => 100.5,
            DisplayCurrency::BAM => 1.956,
            DisplayCurrency::MKD => 61.5,
            DisplayCurrency::TRY => 38.5,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "EUR" => Some(DisplayCurrency::EUR),
            "RSD" => Some(DisplayCurrency::RSD),
            "ALL" => Some(DisplayCurrency::ALL),
            "BAM" => Some(DisplayCurrency::BAM),
            "MKD" => Some(DisplayCurrency::MKD),
            "TRY" => Some(DisplayCurrency::TRY),
            _ => None,
        }
    }

    /// The display currency shown to a locale.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => DisplayCurrency::EUR,
            Locale::Sr => DisplayCurrency::RSD,
            Locale::Sq => DisplayCurrency::ALL,
            Locale::Bs => DisplayCurrency::BAM,
            Locale::Mk => DisplayCurrency::MKD,
            Locale::Cnr => DisplayCurrency::EUR,
            Locale::Tr => DisplayCurrency::TRY,
        }
    }
}

impl fmt::Display for DisplayCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Format a reference-EUR amount in a display currency.
///
/// Dinar-family currencies (RSD, ALL, MKD) display as whole amounts with
/// thousands separators and a trailing symbol; EUR and TRY prefix their
/// symbol with two decimals; BAM trails "KM" with two decimals.
pub fn format_eur_in(amount_eur: f64, currency: DisplayCurrency) -> String {
    let converted = amount_eur * currency.eur_rate();
    match currency {
        DisplayCurrency::EUR => format!("\u{20ac}{:.2}", converted),
        DisplayCurrency::RSD | DisplayCurrency::ALL | DisplayCurrency::MKD => {
            format!(
                "{} {}",
                group_thousands(converted.round() as i64),
                currency.symbol()
            )
        }
        DisplayCurrency::BAM => format!("{:.2} {}", converted, currency.symbol()),
        DisplayCurrency::TRY => format!("{}{:.2}", currency.symbol(), converted),
    }
}

/// Render an integer with comma thousands separators.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_units() {
        assert_eq!(eur_to_minor_units(33.75), 3375);
        assert_eq!(eur_to_minor_units(0.0), 0);
        // 9.99 * 1.05 regional price rounds to the nearest cent
        assert_eq!(eur_to_minor_units(10.4895), 1049);
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur_in(45.0, DisplayCurrency::EUR), "\u{20ac}45.00");
    }

    #[test]
    fn test_format_dinar_family_rounds_whole() {
        // 45 * 117.2 = 5274
        assert_eq!(format_eur_in(45.0, DisplayCurrency::RSD), "5,274 RSD");
        // 45 * 61.5 = 2767.5, rounds half away from zero
        assert_eq!(
            format_eur_in(45.0, DisplayCurrency::MKD),
            "2,768 \u{434}\u{435}\u{43d}"
        );
    }

    #[test]
    fn test_format_bam_and_try() {
        // 45 * 1.956 = 88.02
        assert_eq!(format_eur_in(45.0, DisplayCurrency::BAM), "88.02 KM");
        // 45 * 38.5 = 1732.50
        assert_eq!(format_eur_in(45.0, DisplayCurrency::TRY), "\u{20ba}1732.50");
    }

    #[test]
    fn test_currency_for_locale() {
        assert_eq!(DisplayCurrency::for_locale(Locale::Sr), DisplayCurrency::RSD);
        assert_eq!(DisplayCurrency::for_locale(Locale::Cnr), DisplayCurrency::EUR);
        assert_eq!(DisplayCurrency::for_locale(Locale::Tr), DisplayCurrency::TRY);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(DisplayCurrency::from_code("rsd"), Some(DisplayCurrency::RSD));
        assert_eq!(DisplayCurrency::from_code("USD"), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(5274), "5,274");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
